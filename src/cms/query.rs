//! Document search options, mirroring the `getByType` options of the CMS client.

/// Sort direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single `orderings` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub field: String,
    pub direction: SortDirection,
}

impl Ordering {
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Desc,
        }
    }

    fn to_param(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.field.clone(),
            SortDirection::Desc => format!("{} desc", self.field),
        }
    }
}

/// Options of a by-type document search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuery {
    /// Page to fetch; the CMS defaults to 1 when omitted.
    pub page: Option<u32>,
    pub page_size: u32,
    pub orderings: Vec<Ordering>,
    /// Field subset, as `<type>.<field>`.
    pub fetch: Vec<String>,
}

impl TypeQuery {
    /// Query parameters for `documents/search`, excluding `ref` and credentials.
    pub fn to_params(&self, doc_type: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", format!("[[at(document.type, \"{}\")]]", doc_type)),
            ("pageSize", self.page_size.to_string()),
        ];

        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }

        if !self.orderings.is_empty() {
            let orderings: Vec<String> = self.orderings.iter().map(Ordering::to_param).collect();
            params.push(("orderings", format!("[{}]", orderings.join(","))));
        }

        if !self.fetch.is_empty() {
            params.push(("fetch", self.fetch.join(",")));
        }

        params
    }
}
