#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Hive Planner session.

use hive_planner_catalog::Catalog;
use hive_planner_core::{LayoutSnapshot, WELCOME_BANNER};
use hive_planner_system_layout_codec as layout_codec;

/// Where the starting layout of a session came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutOrigin {
    /// An explicit share token supplied by the user.
    ShareToken,
    /// The layout persisted by a previous session.
    Persisted,
    /// Nothing was available; the hive starts empty.
    Empty,
}

/// Produces data required to start a session.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the planner starts.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        WELCOME_BANNER
    }

    /// Resolves the starting layout.
    ///
    /// A non-blank share token always wins, even when it decodes to an empty
    /// hive; otherwise the persisted token is used, and failing both the hive
    /// starts empty.
    #[must_use]
    pub fn initial_layout(
        &self,
        share_token: Option<&str>,
        persisted_token: Option<&str>,
        catalog: &Catalog,
    ) -> (LayoutSnapshot, LayoutOrigin) {
        if let Some(token) = non_blank(share_token) {
            log::debug!("starting from share token");
            return (
                layout_codec::decode(token, catalog),
                LayoutOrigin::ShareToken,
            );
        }

        if let Some(token) = non_blank(persisted_token) {
            log::debug!("starting from persisted layout");
            return (
                layout_codec::decode(token, catalog),
                LayoutOrigin::Persisted,
            );
        }

        (LayoutSnapshot::empty(), LayoutOrigin::Empty)
    }
}

fn non_blank(token: Option<&str>) -> Option<&str> {
    token.filter(|value| !value.trim().is_empty())
}
