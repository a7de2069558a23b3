// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::Object;

use crate::cursor::ListCursor;
use crate::list::PageInfo;

/// Information about pagination in a list.
#[Object(name = "PageInfo")]
impl PageInfo {
    /// When paginating forwards, are there more items?
    async fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// When paginating backwards, are there more items?
    async fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// When paginating backwards, the cursor to continue.
    async fn start_cursor(&self) -> Option<&ListCursor> {
        self.start_cursor.as_ref()
    }

    /// When paginating forwards, the cursor to continue.
    async fn end_cursor(&self) -> Option<&ListCursor> {
        self.end_cursor.as_ref()
    }
}
