pub mod cmd {
    pub const MONTHS: &str = "vacfind months";
    pub const CONFIG_SET_API_URL: &str = "vacfind config set --api-url <URL>";
    pub const SEARCH_EXPAND_ALL: &str = "vacfind search ... --expand-all";
    pub const SEARCH_SORT: &str = "vacfind search ... --sort temperature";
}

pub mod fmt {
    pub fn search_expand(country: &str) -> String {
        format!("vacfind search ... --expand \"{}\"", country)
    }
}
