//! `siteconf check`: report on a loaded config.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

/// Summarize a config that passed validation.
///
/// Loading already printed warnings and failed on errors, so only the
/// outcome is left to report.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![format!("{} is valid", config.config_path.display())];

    lines.push(format!(
        "site '{}' by {}",
        config.site.name,
        if config.site.author.is_empty() {
            "<no author>"
        } else {
            config.site.author.as_str()
        }
    ));

    if let Some(prefix) = config.path_prefix() {
        lines.push(format!("served under /{prefix}/"));
    }

    let feeds: Vec<_> = crate::config::FeedKind::ALL
        .iter()
        .filter_map(|&kind| config.feed.get(kind).pattern())
        .collect();
    if feeds.is_empty() {
        lines.push("feeds: disabled".into());
    } else {
        lines.push(format!("feeds: {}", feeds.join(", ")));
    }

    lines.push(format!(
        "links: {} blogroll, {} social",
        config.links.blogroll.len(),
        config.links.social.len()
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_CONFIG;

    #[test]
    fn test_summary_of_sample() {
        let config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        let lines = summary(&config);
        assert!(lines.iter().any(|l| l.contains("Done Is Better Than Perfect")));
        assert!(lines.iter().any(|l| l == "served under /blog/"));
        assert!(lines.iter().any(|l| l == "feeds: disabled"));
        assert!(lines.iter().any(|l| l == "links: 4 blogroll, 2 social"));
    }

    #[test]
    fn test_summary_lists_enabled_feeds() {
        let config = SiteConfig::from_str(
            "[site]\nname = \"x\"\nurl = \"https://example.com\"\n[feed]\nall_atom = true",
        )
        .unwrap();
        let lines = summary(&config);
        assert!(lines.iter().any(|l| l == "feeds: feeds/all.atom.xml"));
        assert!(lines.iter().any(|l| l.contains("<no author>")));
        assert!(!lines.iter().any(|l| l.starts_with("served under")));
    }
}
