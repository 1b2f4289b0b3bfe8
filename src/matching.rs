//! Role title lookups
//!
//! Loose text matching between a role title and the personnel, grievance and
//! Right to Service lists. Used by the role detail endpoint; independent of
//! the hierarchy code.

use crate::entity::grievance_category::GrievanceCategoryView;
use crate::entity::personnel::PersonnelView;
use crate::entity::rts_service::RtsServiceView;

/// Person holding `role_title`: exact title first, then the first whose title contains it
pub fn best_personnel_match<'a>(
    personnel: &'a [PersonnelView],
    role_title: &str,
) -> Option<&'a PersonnelView> {
    let title = role_title.trim().to_lowercase();
    if title.is_empty() {
        return None;
    }

    personnel
        .iter()
        .find(|p| p.role_title.trim().to_lowercase() == title)
        .or_else(|| {
            personnel
                .iter()
                .find(|p| p.role_title.to_lowercase().contains(&title))
        })
}

/// Grievance categories that mention the role, or whose first word appears in its title
pub fn related_grievance_categories<'a>(
    categories: &'a [GrievanceCategoryView],
    role_title: &str,
) -> Vec<&'a GrievanceCategoryView> {
    categories
        .iter()
        .filter(|c| loosely_related(&c.category_name, role_title))
        .collect()
}

/// RTS services whose designated officer is the role
pub fn related_rts_services<'a>(
    services: &'a [RtsServiceView],
    role_title: &str,
) -> Vec<&'a RtsServiceView> {
    services
        .iter()
        .filter(|s| loosely_related(&s.designated_officer, role_title))
        .collect()
}

fn loosely_related(label: &str, role_title: &str) -> bool {
    let label = label.to_lowercase();
    let title = role_title.trim().to_lowercase();
    if title.is_empty() {
        return false;
    }
    if label.contains(&title) {
        return true;
    }
    label
        .split_whitespace()
        .next()
        .map_or(false, |first| title.contains(first))
}
