//! Auto-assignment resolver - maps a category label to department routing.
//!
//! Pure lookup over a fixed table. Unknown labels (including `other`) fall
//! back to the generic support pair, so the resolver never fails.

use crate::types::Assignment;

/// Fixed category routing: (category, department, staff name).
const ROUTING_TABLE: &[(&str, &str, &str)] = &[
    ("appointment_scheduling", "Appointments Desk", "Sarah Johnson"),
    ("doctor_behavior", "Medical Affairs", "Priya Nair"),
    ("staff_behavior", "Human Resources", "Angela Martinez"),
    ("billing_issues", "Billing Department", "Robert Wilson"),
    ("wait_times", "Patient Services", "David Chen"),
    ("medication_issues", "Pharmacy", "Fatima Hassan"),
    ("facility_cleanliness", "Facilities Management", "George Okafor"),
    ("food_quality", "Dietary Services", "Maria Lopez"),
    ("equipment_issues", "Biomedical Engineering", "James Carter"),
    ("communication", "Patient Relations", "Emily Brown"),
    ("privacy_concerns", "Compliance Office", "Thomas Reed"),
    ("emergency_response", "Emergency Department", "Linda Park"),
];

const FALLBACK_DEPARTMENT: &str = "General Support";
const FALLBACK_STAFF: &str = "Support Team";

/// Resolve the responsible department and staff member for a category.
pub fn assign(category: &str) -> Assignment {
    let (department, staff_name) = ROUTING_TABLE
        .iter()
        .find(|(label, _, _)| *label == category)
        .map(|(_, department, staff)| (*department, *staff))
        .unwrap_or((FALLBACK_DEPARTMENT, FALLBACK_STAFF));

    Assignment {
        staff_id: staff_id_for(staff_name),
        staff_name: staff_name.to_string(),
        department: department.to_string(),
    }
}

/// `staff_` + lowercased name with whitespace runs collapsed to underscores.
fn staff_id_for(staff_name: &str) -> String {
    let slug = staff_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("staff_{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_routes_to_robert_wilson() {
        let assignment = assign("billing_issues");
        assert_eq!(assignment.department, "Billing Department");
        assert_eq!(assignment.staff_name, "Robert Wilson");
        assert_eq!(assignment.staff_id, "staff_robert_wilson");
    }

    #[test]
    fn unknown_category_falls_back_to_support() {
        let assignment = assign("nonexistent_category");
        assert_eq!(assignment.department, "General Support");
        assert_eq!(assignment.staff_name, "Support Team");
        assert_eq!(assignment.staff_id, "staff_support_team");
    }

    #[test]
    fn other_sentinel_also_falls_back() {
        assert_eq!(assign("other").department, "General Support");
    }

    #[test]
    fn every_lexicon_category_is_routable() {
        for entry in crate::lexicon::CATEGORY_LEXICON {
            let assignment = assign(entry.label);
            assert_ne!(assignment.department, "General Support", "{}", entry.label);
            assert!(assignment.staff_id.starts_with("staff_"));
        }
    }

    #[test]
    fn staff_id_collapses_whitespace_runs() {
        assert_eq!(staff_id_for("Mary  Anne   Lee"), "staff_mary_anne_lee");
    }
}
