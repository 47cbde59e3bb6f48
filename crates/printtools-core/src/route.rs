/// Top-level views reachable by path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    ImageTiler,
    NotFound,
}

impl Page {
    /// `/` is home, `/image-tiler` the tiling tool, anything else not found.
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "" => Page::Home,
            "/image-tiler" | "image-tiler" => Page::ImageTiler,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::ImageTiler => "/image-tiler",
            Page::NotFound => "/404",
        }
    }

    /// Navigation label key; the not-found page has none.
    pub fn nav_label_key(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("navHome"),
            Page::ImageTiler => Some("navImageTiler"),
            Page::NotFound => None,
        }
    }
}
