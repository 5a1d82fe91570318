//! Outbound links: web pages, e-mail and phone.

use std::io;
use std::process::{Child, Command, ExitStatus};
use std::thread::{self, JoinHandle};

use bevy::prelude::*;

/// A classified outbound link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// `http://` or `https://`, opened in a new browser window
    Web(String),
    /// `mailto:` address
    Email(String),
    /// `tel:` number
    Phone(String),
}

impl LinkTarget {
    /// Classify `href`. Unsupported schemes yield `None`.
    pub fn parse(href: &str) -> Option<LinkTarget> {
        let href = href.trim();
        if let Some(address) = href.strip_prefix("mailto:") {
            return (!address.is_empty()).then(|| LinkTarget::Email(href.to_string()));
        }
        if let Some(number) = href.strip_prefix("tel:") {
            return (!number.is_empty()).then(|| LinkTarget::Phone(href.to_string()));
        }
        if href.starts_with("https://") || href.starts_with("http://") {
            return Some(LinkTarget::Web(href.to_string()));
        }
        None
    }

    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Web(href) | LinkTarget::Email(href) | LinkTarget::Phone(href) => href,
        }
    }

    /// Whether the link leaves the app for a browser window.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, LinkTarget::Web(_))
    }

    /// Hand the link to the platform's URL handler.
    pub fn open(&self) -> io::Result<()> {
        launch(opener_command(self.href())).map(|_| ())
    }
}

/// Start `command` and wait for it on a background thread, so the child is
/// reaped once it exits.
fn launch(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let child = command.spawn()?;
    Ok(reap(child))
}

fn reap(mut child: Child) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || child.wait())
}

#[cfg(target_os = "windows")]
fn opener_command(href: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", href]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(href: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(href);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(href: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(href);
    command
}

/// A button that opens an outbound link when pressed.
#[derive(Component, Clone, Debug)]
pub struct ExternalLink(pub &'static str);

/// Open links whose buttons were pressed this frame.
pub fn open_pressed_links(buttons: Query<(&Interaction, &ExternalLink), Changed<Interaction>>) {
    for (interaction, link) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(target) = LinkTarget::parse(link.0) else {
            warn!("Ignoring unsupported link {}", link.0);
            continue;
        };
        if target.opens_new_context() {
            info!("Opening {} in the browser", target.href());
        } else {
            info!("Handing {} to the system handler", target.href());
        }
        if let Err(e) = target.open() {
            warn!("Could not open {}: {e}", target.href());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_schemes() {
        assert_eq!(
            LinkTarget::parse("mailto:someone@example.com"),
            Some(LinkTarget::Email("mailto:someone@example.com".into()))
        );
        assert_eq!(
            LinkTarget::parse("tel:+15550100"),
            Some(LinkTarget::Phone("tel:+15550100".into()))
        );
        assert_eq!(
            LinkTarget::parse("https://example.com"),
            Some(LinkTarget::Web("https://example.com".into()))
        );
        assert_eq!(
            LinkTarget::parse(" http://example.com "),
            Some(LinkTarget::Web("http://example.com".into()))
        );
    }

    #[test]
    fn rejects_unsupported_or_empty() {
        assert_eq!(LinkTarget::parse("ftp://example.com"), None);
        assert_eq!(LinkTarget::parse("javascript:alert(1)"), None);
        assert_eq!(LinkTarget::parse("mailto:"), None);
        assert_eq!(LinkTarget::parse(""), None);
    }

    #[test]
    fn only_web_links_open_new_context() {
        assert!(LinkTarget::Web("https://example.com".into()).opens_new_context());
        assert!(!LinkTarget::Email("mailto:a@b.c".into()).opens_new_context());
        assert!(!LinkTarget::Phone("tel:1".into()).opens_new_context());
    }

    #[cfg(unix)]
    #[test]
    fn launched_opener_is_reaped() {
        let mut stub = Command::new("sh");
        stub.args(["-c", "exit 0"]);
        let status = launch(stub).unwrap().join().unwrap().unwrap();
        assert!(status.success());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn no_zombie_after_several_opens() {
        let pids: Vec<u32> = (0..3)
            .map(|_| {
                let child = Command::new("true").spawn().unwrap();
                let pid = child.id();
                reap(child).join().unwrap().unwrap();
                pid
            })
            .collect();

        for pid in pids {
            let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).unwrap_or_default();
            assert!(!stat.contains(") Z "), "child {pid} left as a zombie: {stat}");
        }
    }

    #[test]
    fn missing_opener_reports_error() {
        let result = launch(Command::new("portfolio-no-such-opener"));
        assert!(result.is_err());
    }

    #[test]
    fn static_content_links_are_supported() {
        use crate::content::{CONTACTS, PROJECTS};
        for href in CONTACTS.iter().filter_map(|c| c.href) {
            assert!(LinkTarget::parse(href).is_some(), "{href}");
        }
        for project in PROJECTS {
            for href in project.source.iter().chain(project.live.iter()) {
                assert!(LinkTarget::parse(href).is_some(), "{href}");
            }
        }
    }
}
