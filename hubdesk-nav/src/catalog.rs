//! Feature catalog contract consumed by the menu builder and access gate.

use serde::{Deserialize, Serialize};

use crate::active::split_href;
use crate::model::{Icon, PlanTier};

/// One navigable capability declared by a hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_plan: Option<PlanTier>,
}

impl Feature {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon,
            section: None,
            required_plan: None,
        }
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn requires(mut self, plan: PlanTier) -> Self {
        self.required_plan = Some(plan);
        self
    }
}

/// Declarative description of a hub and its flat feature list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubDeclaration {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl HubDeclaration {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
            features: Vec::new(),
        }
    }

    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Root path of the hub, e.g. `/crm`.
    pub fn root_path(&self) -> String {
        hub_root(&self.id)
    }

    /// Feature whose path governs `target`: an exact match, else the longest
    /// path prefix on a segment boundary.
    fn governing_feature(&self, target: &str) -> Option<&Feature> {
        self.features
            .iter()
            .filter(|feature| path_governs(&feature.path, target))
            .max_by_key(|feature| feature.path.len())
    }
}

/// Root path for a hub id.
pub fn hub_root(hub_id: &str) -> String {
    format!("/{hub_id}")
}

fn path_governs(feature_path: &str, target: &str) -> bool {
    if target == feature_path {
        return true;
    }
    target
        .strip_prefix(feature_path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Plan-based access predicate.
pub trait PlanAccess {
    /// Return whether `plan` may open `path` inside `hub_id`.
    fn has_feature_access(
        &self,
        hub_id: &str,
        path: &str,
        plan: PlanTier,
    ) -> bool;
}

/// Source of hub declarations plus their access rules.
pub trait FeatureCatalog: PlanAccess {
    /// Return the declaration for `hub_id`, if the catalog knows it.
    fn hub(&self, hub_id: &str) -> Option<&HubDeclaration>;

    /// Known hub ids in display order.
    fn hub_ids(&self) -> Vec<String>;
}

/// In-memory catalog backed by a list of declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    hubs: Vec<HubDeclaration>,
}

impl StaticCatalog {
    pub fn new(hubs: Vec<HubDeclaration>) -> Self {
        Self { hubs }
    }

    pub fn with_hub(mut self, hub: HubDeclaration) -> Self {
        self.hubs.push(hub);
        self
    }
}

impl PlanAccess for StaticCatalog {
    fn has_feature_access(
        &self,
        hub_id: &str,
        path: &str,
        plan: PlanTier,
    ) -> bool {
        let Some(hub) = self.hub(hub_id) else {
            return true;
        };
        let (target, _) = split_href(path);

        hub.governing_feature(target)
            .and_then(|feature| feature.required_plan)
            .is_none_or(|required| plan.covers(required))
    }
}

impl FeatureCatalog for StaticCatalog {
    fn hub(&self, hub_id: &str) -> Option<&HubDeclaration> {
        self.hubs.iter().find(|hub| hub.id == hub_id)
    }

    fn hub_ids(&self) -> Vec<String> {
        self.hubs.iter().map(|hub| hub.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Feature, FeatureCatalog, HubDeclaration, PlanAccess, StaticCatalog,
    };
    use crate::model::{Icon, PlanTier};

    fn catalog() -> StaticCatalog {
        StaticCatalog::default().with_hub(
            HubDeclaration::new("crm", "CRM", Icon::Contacts)
                .feature(Feature::new(
                    "Contacts",
                    "/crm/contacts",
                    Icon::Contacts,
                ))
                .feature(
                    Feature::new("Deals", "/crm/deals", Icon::Deals)
                        .requires(PlanTier::Pro),
                )
                .feature(
                    Feature::new(
                        "Forecast",
                        "/crm/deals/forecast",
                        Icon::Reports,
                    )
                    .requires(PlanTier::Enterprise),
                ),
        )
    }

    #[test]
    fn given_unrestricted_path_when_checked_then_access_is_granted() {
        let catalog = catalog();

        assert!(catalog.has_feature_access(
            "crm",
            "/crm/contacts",
            PlanTier::Free
        ));
        assert!(catalog.has_feature_access(
            "crm",
            "/crm/unknown",
            PlanTier::Free
        ));
        assert!(catalog.has_feature_access("other", "/x", PlanTier::Free));
    }

    #[test]
    fn given_plan_restricted_path_when_checked_then_plan_must_cover_it() {
        let catalog = catalog();

        assert!(!catalog.has_feature_access(
            "crm",
            "/crm/deals",
            PlanTier::Starter
        ));
        assert!(catalog.has_feature_access(
            "crm",
            "/crm/deals?stage=won",
            PlanTier::Pro
        ));
        assert!(catalog.has_feature_access(
            "crm",
            "/crm/deals/42",
            PlanTier::Pro
        ));
    }

    #[test]
    fn given_nested_feature_paths_when_checked_then_longest_prefix_governs() {
        let catalog = catalog();

        assert!(!catalog.has_feature_access(
            "crm",
            "/crm/deals/forecast",
            PlanTier::Pro
        ));
        assert!(catalog.has_feature_access(
            "crm",
            "/crm/deals/forecast/q3",
            PlanTier::Enterprise
        ));
    }

    #[test]
    fn given_catalog_when_listing_hubs_then_declaration_order_is_kept() {
        let catalog = catalog().with_hub(HubDeclaration::new(
            "settings",
            "Settings",
            Icon::Settings,
        ));

        assert_eq!(catalog.hub_ids(), vec!["crm", "settings"]);
        assert_eq!(
            catalog.hub("crm").map(HubDeclaration::root_path),
            Some(String::from("/crm"))
        );
    }
}
