//! Filtering, sorting, expansion and pagination options for query endpoints.
//!
//! `filter` and `order` take expressions in the platform's Searchlight query
//! language. They are passed through verbatim, never parsed here.

use crate::connection::QueryPairs;

/// Parameters accepted by every `query_*` and view operation.
///
/// Unset fields are omitted from the request so the server applies its own
/// defaults (page number 0, and a page size that depends on the resource).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    /// Searchlight filter expression, e.g. `invoiceStatusCode eq 'Open'`
    pub filter: Option<String>,

    /// Comma separated list of collections to expand, e.g. `Lines,Payments`
    pub include: Option<String>,

    /// Searchlight sort expression, e.g. `invoiceDate desc`
    pub order: Option<String>,

    pub page_size: Option<u32>,

    pub page_number: Option<u32>,
}

impl QueryParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Convert to query parameters for the API request.
    ///
    /// Pairs are emitted in a fixed order: `filter`, `include`, `order`,
    /// `pageSize`, `pageNumber`.
    #[must_use]
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut params = Vec::new();

        if let Some(filter) = &self.filter {
            params.push(("filter", filter.clone()));
        }

        if let Some(include) = &self.include {
            params.push(("include", include.clone()));
        }

        if let Some(order) = &self.order {
            params.push(("order", order.clone()));
        }

        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }

        if let Some(page_number) = self.page_number {
            params.push(("pageNumber", page_number.to_string()));
        }

        params
    }
}

/// Query pairs for a retrieve-by-id call, which only understands `include`.
pub(crate) fn include_pairs(include: Option<&str>) -> QueryPairs {
    include
        .map(|include| vec![("include", include.to_string())])
        .unwrap_or_default()
}
