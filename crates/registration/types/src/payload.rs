//! The flat submission payload
//!
//! This is the one bit-exact external contract in the system: the
//! spreadsheet integration keys its columns off these JSON field
//! names. Do not rename them without migrating the sheet side.

use serde::Serialize;

/// Flat payload POSTed to the submission endpoint.
///
/// Always carries the destination tab and the four contact fields;
/// form-specific fields are appended per form kind and skipped from
/// the JSON entirely when absent. Booleans are flattened to
/// `"Yes"`/`"No"` because the sheet stores display strings, not JSON
/// booleans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SheetPayload {
    #[serde(rename = "sheetName")]
    pub sheet_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    /// Tier display names joined `", "` in the order the user
    /// selected them (tiered summit forms only)
    #[serde(rename = "tiersSelected", skip_serializing_if = "Option::is_none")]
    pub tiers_selected: Option<String>,
    /// `"Yes"` / `"No"` (tiered summit forms only)
    #[serde(
        rename = "privateClassInterest",
        skip_serializing_if = "Option::is_none"
    )]
    pub private_class_interest: Option<String>,
    /// Chosen coaching format id, or `"N/A"` (tiered summit forms only)
    #[serde(rename = "privateClassType", skip_serializing_if = "Option::is_none")]
    pub private_class_type: Option<String>,
    /// Free-text goals (local workshop forms only)
    #[serde(rename = "learningGoals", skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,
    /// Free-text notes (generic summit forms only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SheetPayload {
    /// Payload with only the common fields set
    pub fn new(
        sheet_name: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        instagram: impl Into<String>,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            instagram: instagram.into(),
            tiers_selected: None,
            private_class_interest: None,
            private_class_type: None,
            learning_goals: None,
            notes: None,
        }
    }

    /// Attach the tiered-summit fields
    pub fn with_summit_fields(
        mut self,
        tiers_selected: impl Into<String>,
        private_class_interest: bool,
        private_class_type: Option<&str>,
    ) -> Self {
        self.tiers_selected = Some(tiers_selected.into());
        self.private_class_interest =
            Some(if private_class_interest { "Yes" } else { "No" }.to_string());
        self.private_class_type = Some(private_class_type.unwrap_or("N/A").to_string());
        self
    }

    /// Attach the local-workshop free-text field
    pub fn with_learning_goals(mut self, learning_goals: impl Into<String>) -> Self {
        self.learning_goals = Some(learning_goals.into());
        self
    }

    /// Attach the generic-summit free-text field
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summit_payload_keys_match_sheet_columns() {
        let payload = SheetPayload::new(
            "Hailey_Kollin_Summit",
            "Aina",
            "aina@example.com",
            "+60 12-345 6789",
            "@aina",
        )
        .with_summit_fields("Foundation Tier, Elite Tier", true, Some("1-on-1"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sheetName"], "Hailey_Kollin_Summit");
        assert_eq!(json["tiersSelected"], "Foundation Tier, Elite Tier");
        assert_eq!(json["privateClassInterest"], "Yes");
        assert_eq!(json["privateClassType"], "1-on-1");
        assert!(json.get("learningGoals").is_none());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_unset_private_class_type_serializes_as_na() {
        let payload = SheetPayload::new("S", "n", "e", "p", "i")
            .with_summit_fields("Foundation Tier", false, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["privateClassInterest"], "No");
        assert_eq!(json["privateClassType"], "N/A");
    }

    #[test]
    fn test_local_payload_omits_summit_keys() {
        let payload = SheetPayload::new("Local_Workshops", "n", "e", "p", "i")
            .with_learning_goals("toss hands");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["learningGoals"], "toss hands");
        assert!(json.get("tiersSelected").is_none());
        assert!(json.get("privateClassInterest").is_none());
    }
}
