pub enum ApiRoute {
    Form,
    Health,
    Upload,
    Docs,
}

impl ApiRoute {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRoute::Form => "/",
            ApiRoute::Health => "/health",
            ApiRoute::Upload => "/upload",
            ApiRoute::Docs => "/api-docs",
        }
    }
}
