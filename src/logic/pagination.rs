//! Page counter behind the results table's infinite scroll.
//!
//! Results are already in memory; paging only bounds how many rows are
//! rendered. The page advances when the bottom sentinel (the end of the
//! rendered slice) scrolls into view.

use crate::state::AppState;

/// Rows added to the visible slice per page.
pub const PAGE_SIZE: usize = 100;

/// 1-based page counter over a filtered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page; never below 1.
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Pager {
    /// Current page number.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// What: Go back to page 1.
    pub const fn reset(&mut self) {
        self.page = 1;
    }

    /// What: Number of pages needed for `total` results (0 when empty).
    #[must_use]
    pub const fn last_page(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE)
    }

    /// What: Length of the rendered prefix: `min(total, page * PAGE_SIZE)`.
    #[must_use]
    pub const fn visible_len(self, total: usize) -> usize {
        let cap = self.page.saturating_mul(PAGE_SIZE);
        if total < cap { total } else { cap }
    }

    /// What: The rendered prefix of `items`.
    #[must_use]
    pub fn visible<T>(self, items: &[T]) -> &[T] {
        &items[..self.visible_len(items.len())]
    }

    /// What: React to the bottom sentinel becoming visible.
    ///
    /// Inputs:
    /// - `total`: Length of the filtered list
    ///
    /// Output:
    /// - `true` when the page advanced.
    ///
    /// Details:
    /// - Advances by one, clamped to the last page and never below page 1.
    pub fn on_sentinel_visible(&mut self, total: usize) -> bool {
        let next = (self.page + 1).min(Self::last_page(total)).max(1);
        let advanced = next > self.page;
        self.page = next;
        advanced
    }
}

/// What: Decide whether the end of the rendered slice is inside the viewport.
///
/// Inputs:
/// - `offset`: First row shown in the viewport
/// - `rows`: Viewport height in rows
/// - `selected`: Highlighted row
/// - `visible_len`: Length of the rendered slice
///
/// Output:
/// - `true` when the last rendered row is on screen.
#[must_use]
pub const fn sentinel_visible(offset: usize, rows: usize, selected: usize, visible_len: usize) -> bool {
    if rows == 0 {
        return false;
    }
    let bottom = if offset + rows > selected + 1 {
        offset + rows
    } else {
        selected + 1
    };
    bottom >= visible_len
}

/// What: Advance the results page if the sentinel is visible.
///
/// Inputs:
/// - `app`: Mutable application state (uses the last rendered viewport height)
///
/// Output:
/// - `true` when more rows were revealed.
pub fn maybe_advance_page(app: &mut AppState) -> bool {
    let total = app.filtered.len();
    let visible = app.pager.visible_len(total);
    if !sentinel_visible(
        app.results_state.offset(),
        usize::from(app.results_rows),
        app.results_selected,
        visible,
    ) {
        return false;
    }
    let advanced = app.pager.on_sentinel_visible(total);
    if advanced {
        tracing::debug!(
            page = app.pager.page(),
            visible = app.pager.visible_len(total),
            total,
            "[Pager] Revealed next page"
        );
    }
    advanced
}
