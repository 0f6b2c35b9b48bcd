use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// How the indexer treats one field of a search document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchField {
    pub name: &'static str,
    pub sortable: bool,
    pub filterable: bool,
    /// Match on the whole value rather than analysed tokens
    pub exact: bool,
    pub facet: bool,
    pub default_order: Option<SortOrder>,
}

impl SearchField {
    const fn new(name: &'static str, sortable: bool, filterable: bool, exact: bool) -> Self {
        Self {
            name,
            sortable,
            filterable,
            exact,
            facet: false,
            default_order: None,
        }
    }

    const fn facet(mut self) -> Self {
        self.facet = true;
        self
    }

    const fn default_order(mut self, order: SortOrder) -> Self {
        self.default_order = Some(order);
        self
    }
}

/// Fields of the user search document. Underscore-prefixed names are the
/// lowercased sort keys of their plain counterparts.
pub const USER_SEARCH_FIELDS: [SearchField; 10] = [
    SearchField::new("username", false, true, true),
    SearchField::new("_username", true, false, false),
    SearchField::new("name", false, true, true),
    SearchField::new("_name", true, false, false),
    SearchField::new("date_joined", true, false, false).default_order(SortOrder::Asc),
    SearchField::new("company", true, true, true),
    SearchField::new("location", true, true, true),
    SearchField::new("is_superuser", false, true, false).facet(),
    SearchField::new("is_staff", false, false, false).facet(),
    SearchField::new("is_admin", false, false, false).facet(),
];
