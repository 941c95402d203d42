//! Per-item lock predicate.

use crate::catalog::PlanAccess;
use crate::model::{Item, PlanTier};

/// Decides whether menu items are locked for the current plan.
#[derive(Clone, Copy)]
pub struct AccessGate<'a> {
    hub_id: Option<&'a str>,
    plan: PlanTier,
    access: Option<&'a dyn PlanAccess>,
}

impl<'a> AccessGate<'a> {
    pub fn new(
        hub_id: Option<&'a str>,
        plan: PlanTier,
        access: Option<&'a dyn PlanAccess>,
    ) -> Self {
        Self {
            hub_id,
            plan,
            access,
        }
    }

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    /// Explicit `locked` wins. Otherwise the item's own required plan and
    /// the catalog's access rule for its href must both allow the plan.
    pub fn is_locked(&self, item: &Item) -> bool {
        if item.locked == Some(true) {
            return true;
        }
        if item
            .required_plan
            .is_some_and(|required| !self.plan.covers(required))
        {
            return true;
        }

        let (Some(hub_id), Some(access), Some(href)) =
            (self.hub_id, self.access, item.href.as_deref())
        else {
            return false;
        };
        !access.has_feature_access(hub_id, href, self.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::AccessGate;
    use crate::catalog::{Feature, HubDeclaration, StaticCatalog};
    use crate::model::{Icon, Item, PlanTier};

    fn catalog() -> StaticCatalog {
        StaticCatalog::default().with_hub(
            HubDeclaration::new("crm", "CRM", Icon::Contacts).feature(
                Feature::new("Deals", "/crm/deals", Icon::Deals)
                    .requires(PlanTier::Pro),
            ),
        )
    }

    #[test]
    fn given_explicit_lock_when_checked_then_item_is_locked_on_any_plan() {
        let catalog = catalog();
        let gate =
            AccessGate::new(Some("crm"), PlanTier::Enterprise, Some(&catalog));

        assert!(gate.is_locked(&Item::new("Legacy").href("/crm").locked(true)));
        assert!(!gate.is_locked(&Item::new("Open").href("/crm").locked(false)));
    }

    #[test]
    fn given_catalog_restriction_when_plan_is_too_low_then_item_is_locked() {
        let catalog = catalog();
        let deals = Item::new("Deals").href("/crm/deals");

        let starter =
            AccessGate::new(Some("crm"), PlanTier::Starter, Some(&catalog));
        let pro = AccessGate::new(Some("crm"), PlanTier::Pro, Some(&catalog));

        assert!(starter.is_locked(&deals));
        assert!(!pro.is_locked(&deals));
    }

    #[test]
    fn given_no_hub_or_catalog_when_checked_then_item_is_accessible() {
        let catalog = catalog();
        let deals = Item::new("Deals").href("/crm/deals");

        assert!(
            !AccessGate::new(None, PlanTier::Free, Some(&catalog))
                .is_locked(&deals)
        );
        assert!(
            !AccessGate::new(Some("crm"), PlanTier::Free, None)
                .is_locked(&deals)
        );
    }

    #[test]
    fn given_item_required_plan_when_plan_is_lower_then_item_is_locked() {
        let gate = AccessGate::new(None, PlanTier::Starter, None);
        let reports = Item::new("Reports")
            .href("/crm/reports")
            .required_plan(PlanTier::Pro);

        assert!(gate.is_locked(&reports));
    }
}
