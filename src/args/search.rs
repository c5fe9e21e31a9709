//! Command-line search: print one page of matching lectures and exit.

use crate::logic::{PAGE_SIZE, Pager, filter_lectures};
use crate::sources::CatalogClient;
use crate::state::{Lecture, SearchOption};
use crate::ui::helpers::markup_to_text;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Format one result page as tab-separated rows plus a summary line.
///
/// Inputs:
/// - `lectures`: Combined catalog list
/// - `options`: Filter selection
/// - `page`: 1-based page number; clamped into the available pages
///
/// Output:
/// - Rows `code, grade, title, credits, major, schedule` (markup stripped),
///   followed by `"<n> results, page <p>/<last>"`.
#[must_use]
pub fn format_search_page(lectures: &[Lecture], options: &SearchOption, page: usize) -> Vec<String> {
    let filtered = filter_lectures(lectures, options);
    let last = Pager::last_page(filtered.len()).max(1);
    let page = page.clamp(1, last);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered.len());
    let mut out: Vec<String> = filtered[start..end]
        .iter()
        .map(|l| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                l.id,
                l.grade,
                markup_to_text(&l.title),
                l.credits,
                markup_to_text(&l.major),
                markup_to_text(&l.schedule)
            )
        })
        .collect();
    out.push(format!("{} results, page {page}/{last}", filtered.len()));
    out
}

/// What: Handle `--search`: fetch the catalog, filter, and print one page.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` after printing; `Err` when the catalog cannot be fetched.
///
/// # Errors
/// - Client construction or catalog fetch failures.
pub async fn handle_search(args: &crate::args::Args) -> Result<()> {
    let mut prefs = crate::theme::settings();
    if let Some(catalog) = &args.catalog {
        prefs.catalog_base.clone_from(catalog);
    }
    let options = args.search_options();
    tracing::info!(query = %options.query, page = args.page, "Search mode requested from CLI");
    let client = CatalogClient::from_settings(&prefs)?;
    let lectures = client.fetch_all_lectures().await?;
    for line in format_search_page(&lectures, &options, args.page) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Lecture> {
        (0..n)
            .map(|i| Lecture {
                id: format!("C{i:03}"),
                title: format!("Course {i}"),
                credits: "3".into(),
                major: "공과대학<p>CS".into(),
                grade: 1,
                schedule: "월1".into(),
            })
            .collect()
    }

    #[test]
    /// What: Pages are sliced by 100 and clamped to the last page
    ///
    /// - Input: 250 lectures; pages 1, 3, and 9
    /// - Output: 100, 50, and 50 rows; summary names the clamped page
    fn search_pages_are_sliced_and_clamped() {
        let lectures = catalog(250);
        let opts = SearchOption::default();
        let p1 = format_search_page(&lectures, &opts, 1);
        assert_eq!(p1.len(), 101);
        assert!(p1[0].starts_with("C000\t1\tCourse 0\t3\t공과대학 CS\t월1"));
        let p3 = format_search_page(&lectures, &opts, 3);
        assert_eq!(p3.len(), 51);
        assert_eq!(p3.last().map(String::as_str), Some("250 results, page 3/3"));
        let p9 = format_search_page(&lectures, &opts, 9);
        assert_eq!(p9, p3);
    }

    #[test]
    /// What: No matches prints only the summary
    fn search_without_matches() {
        let opts = SearchOption {
            query: "zzz".into(),
            ..SearchOption::default()
        };
        assert_eq!(
            format_search_page(&catalog(3), &opts, 1),
            vec!["0 results, page 1/1".to_string()]
        );
    }
}
