//! Configuration section definitions.
//!
//! Each module corresponds to a section in `siteconf.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Author, name, url, timezone, language    |
//! | `paths` | `[paths]`    | Content, static and article directories  |
//! | `build` | `[build]`    | Pagination, relative URLs                |
//! | `feed`  | `[feed]`     | Atom/RSS feed toggles                    |
//! | `links` | `[links]`    | Blogroll and social links                |
//! | `theme` | `[theme]`    | Theme directory                          |

pub mod build;
pub mod feed;
pub mod links;
pub mod paths;
pub mod site;
pub mod theme;

pub use build::{BuildConfig, Pagination};
pub use feed::{FeedConfig, FeedKind, FeedToggle};
pub use links::{Link, LinksConfig};
pub use paths::PathsConfig;
pub use site::SiteInfoConfig;
pub use theme::ThemeConfig;
