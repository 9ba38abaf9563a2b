//! Tests for settings domain models and the remote row mapping.

#[cfg(test)]
mod tests {
    use crate::constants::{DEFAULT_CLUB_NAME, DEFAULT_LOGO_PATH, DEFAULT_PRIMARY_COLOR};
    use crate::settings::{ClubSettings, ClubSettingsRow, ClubSettingsUpdate};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn full_row() -> ClubSettingsRow {
        ClubSettingsRow {
            id: 1,
            name: Some("Camden FC".to_string()),
            logo: Some("/crest.png".to_string()),
            primary_color: Some("#000000".to_string()),
        }
    }

    // ==================== Defaults ====================

    #[test]
    fn test_default_settings() {
        let settings = ClubSettings::default();
        assert_eq!(settings.name, DEFAULT_CLUB_NAME);
        assert_eq!(settings.logo, DEFAULT_LOGO_PATH);
        assert_eq!(settings.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(settings.finance_starting_balance, Decimal::ZERO);
    }

    // ==================== from_row ====================

    #[test]
    fn test_from_row_full() {
        let settings = ClubSettings::from_row(full_row());
        assert_eq!(settings.name, "Camden FC");
        assert_eq!(settings.logo, "/crest.png");
        assert_eq!(settings.primary_color, "#000000");
        assert_eq!(settings.finance_starting_balance, Decimal::ZERO);
    }

    #[test]
    fn test_from_row_null_logo_falls_back_to_default() {
        let row = ClubSettingsRow {
            id: 1,
            name: Some("Camden FC".to_string()),
            logo: None,
            primary_color: Some("#000000".to_string()),
        };

        let settings = ClubSettings::from_row(row);

        assert_eq!(settings.name, "Camden FC");
        assert_eq!(settings.logo, DEFAULT_LOGO_PATH);
        assert_eq!(settings.primary_color, "#000000");
        assert_eq!(settings.finance_starting_balance, Decimal::ZERO);
    }

    #[test]
    fn test_from_row_blank_name_falls_back_to_default() {
        let row = ClubSettingsRow {
            id: 1,
            name: Some("   ".to_string()),
            logo: None,
            primary_color: None,
        };

        let settings = ClubSettings::from_row(row);
        assert_eq!(settings.name, DEFAULT_CLUB_NAME);
    }

    // ==================== Row mapping round-trip ====================

    #[test]
    fn test_row_mapping_round_trip_is_identity_on_mapped_fields() {
        let original = ClubSettings {
            name: "Camden FC".to_string(),
            logo: "/crest.png".to_string(),
            primary_color: "#336699".to_string(),
            finance_starting_balance: Decimal::ZERO,
        };

        let row = ClubSettingsRow::from_settings(&original);
        let back = ClubSettings::from_row(row);

        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_resets_unmapped_fields_to_default() {
        // The finance starting balance is not represented remotely, so a
        // trip through the row shape yields its default.
        let original = ClubSettings {
            finance_starting_balance: dec!(250.00),
            ..ClubSettings::default()
        };

        let row = ClubSettingsRow::from_settings(&original);
        assert!(serde_json::to_value(&row)
            .unwrap()
            .get("finance_starting_balance")
            .is_none());

        let back = ClubSettings::from_row(row);
        assert_eq!(back.finance_starting_balance, Decimal::ZERO);
    }

    // ==================== apply_row ====================

    #[test]
    fn test_apply_row_overwrites_only_present_fields() {
        let mut settings = ClubSettings::from_row(full_row());

        settings.apply_row(ClubSettingsRow {
            id: 1,
            name: Some("Y".to_string()),
            logo: None,
            primary_color: None,
        });

        assert_eq!(settings.name, "Y");
        assert_eq!(settings.logo, "/crest.png");
        assert_eq!(settings.primary_color, "#000000");
    }

    #[test]
    fn test_apply_row_ignores_blank_name() {
        let mut settings = ClubSettings::from_row(full_row());

        settings.apply_row(ClubSettingsRow {
            id: 1,
            name: Some("".to_string()),
            logo: Some("/other.png".to_string()),
            primary_color: None,
        });

        assert_eq!(settings.name, "Camden FC");
        assert_eq!(settings.logo, "/other.png");
    }

    #[test]
    fn test_apply_row_never_touches_finance_balance() {
        let mut settings = ClubSettings {
            finance_starting_balance: dec!(100),
            ..ClubSettings::default()
        };

        settings.apply_row(full_row());

        assert_eq!(settings.finance_starting_balance, dec!(100));
    }

    // ==================== merge ====================

    #[test]
    fn test_merge_absent_fields_are_unchanged() {
        let mut settings = ClubSettings::default();

        settings.merge(ClubSettingsUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.name, "X");
        assert_eq!(settings.logo, DEFAULT_LOGO_PATH);
        assert_eq!(settings.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_merge_disjoint_updates_both_land() {
        let mut settings = ClubSettings::default();

        settings.merge(ClubSettingsUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        });
        settings.merge(ClubSettingsUpdate {
            primary_color: Some("#123456".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.name, "X");
        assert_eq!(settings.primary_color, "#123456");
    }

    #[test]
    fn test_merge_overlapping_field_last_writer_wins() {
        let mut settings = ClubSettings::default();

        settings.merge(ClubSettingsUpdate {
            name: Some("First".to_string()),
            ..Default::default()
        });
        settings.merge(ClubSettingsUpdate {
            name: Some("Second".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.name, "Second");
    }

    #[test]
    fn test_merge_finance_balance() {
        let mut settings = ClubSettings::default();

        settings.merge(ClubSettingsUpdate {
            finance_starting_balance: Some(dec!(500)),
            ..Default::default()
        });

        assert_eq!(settings.finance_starting_balance, dec!(500));
    }

    // ==================== Validation ====================

    #[test]
    fn test_update_validate_rejects_blank_name() {
        let update = ClubSettingsUpdate {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_validate_accepts_absent_name() {
        let update = ClubSettingsUpdate {
            logo: Some("/new.png".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    // ==================== Serde naming conventions ====================

    #[test]
    fn test_domain_serializes_camel_case() {
        let json = serde_json::to_value(ClubSettings::default()).unwrap();
        assert!(json.get("primaryColor").is_some());
        assert!(json.get("financeStartingBalance").is_some());
        assert!(json.get("primary_color").is_none());
    }

    #[test]
    fn test_row_serializes_snake_case() {
        let json = serde_json::to_value(full_row()).unwrap();
        assert_eq!(json.get("id").unwrap(), 1);
        assert!(json.get("primary_color").is_some());
        assert!(json.get("primaryColor").is_none());
    }
}
