//! Demand Notice Center workflow: select, preview, send.

use chrono::{DateTime, Duration, TimeZone, Utc};
use landgrid_business::{DemandNoticeState, NoticeTemplate, mock_owners};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

mod analytics_tests {
    use super::*;

    #[test]
    fn test_analytics_sum_outstanding_charges() {
        let analytics = DemandNoticeState::new(mock_owners()).analytics();
        assert_eq!(analytics.total_notices, 20);
        assert_eq!(analytics.total_outstanding, 1_928_000);
        assert_eq!(analytics.paid + analytics.unpaid, analytics.total_notices);
    }
}

mod selection_tests {
    use super::*;

    #[test]
    fn test_select_all_and_clear() {
        let mut state = DemandNoticeState::new(mock_owners());
        state.select_all();
        assert_eq!(state.selected_count(), 20);

        state.clear_selection();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_selected_owners_follow_list_order() {
        let mut state = DemandNoticeState::new(mock_owners());
        state.toggle_owner(5);
        state.toggle_owner(2);

        let names: Vec<_> = state.selected_owners().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Musa", "Samuel Okoro"]);
    }
}

mod preview_tests {
    use super::*;

    #[test]
    fn test_preview_requires_selection() {
        let mut state = DemandNoticeState::new(mock_owners());
        assert!(!state.open_preview(1), "unselected owner cannot be previewed");
        assert!(state.preview_owner().is_none());

        state.toggle_owner(1);
        assert!(state.open_preview(1), "selected owner can be previewed");
        assert_eq!(state.preview_owner().map(|o| o.name.as_str()), Some("John Adamu"));

        state.close_preview();
        assert!(state.preview_owner().is_none(), "preview closed");
    }

    #[test]
    fn test_preview_message_uses_template_and_grouped_price() {
        let mut state = DemandNoticeState::new(mock_owners());
        state.toggle_owner(2);
        state.open_preview(2);
        let owner = state.preview_owner().expect("preview open").clone();

        let message = state.render_message(&owner);
        assert!(message.starts_with("Dear Jane Musa,"), "greets the owner");
        assert!(message.contains("(ID: JS-54321)"), "mentions the property");
        assert!(message.contains("₦120,000"), "price grouped in thousands");

        state.set_template(NoticeTemplate::LandUseCharge);
        assert!(
            state.render_message(&owner).contains("The amount due is ₦120,000"),
            "land use charge wording"
        );
    }
}

mod send_tests {
    use super::*;

    #[test]
    fn test_send_without_selection_does_nothing() {
        let mut state = DemandNoticeState::new(mock_owners());
        assert_eq!(state.send(now()), 0);
        assert!(state.last_sent().is_none());
        assert!(!state.sent_banner_visible(now()), "no banner without a send");
    }

    #[test]
    fn test_sent_banner_shows_for_three_seconds() {
        let mut state = DemandNoticeState::new(mock_owners());
        state.toggle_owner(1);
        state.toggle_owner(4);

        assert_eq!(state.send(now()), 2);
        assert!(state.sent_banner_visible(now()), "visible right after sending");
        assert!(
            state.sent_banner_visible(now() + Duration::milliseconds(2_999)),
            "still visible before three seconds"
        );
        assert!(
            !state.sent_banner_visible(now() + Duration::seconds(3)),
            "hidden after three seconds"
        );
    }
}
