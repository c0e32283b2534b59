//! Demand Notice Center.
//!
//! Operators pick property owners, choose a message template (or write their
//! own), preview the personalised message and "send" it. Sending is local
//! only: it records the time and shows a success banner for a few seconds.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::format::group_thousands;

/// Seconds the "Messages sent successfully!" banner stays up.
pub const SENT_BANNER_SECONDS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOwner {
    pub id: u32,
    pub name: String,
    pub property_id: String,
    pub phone: String,
    /// Outstanding charge in naira.
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoticeTemplate {
    #[default]
    DemandNotice,
    LandUseCharge,
}

impl NoticeTemplate {
    pub const ALL: [Self; 2] = [Self::DemandNotice, Self::LandUseCharge];

    pub fn title(self) -> &'static str {
        match self {
            Self::DemandNotice => "Demand Notice",
            Self::LandUseCharge => "Land Use Charge",
        }
    }

    /// Message body with `{{name}}`, `{{propertyId}}` and `{{price}}`
    /// placeholders.
    pub fn body(self) -> &'static str {
        match self {
            Self::DemandNotice => {
                "Dear {{name}},\n\nThis is a demand notice for your property (ID: {{propertyId}}). \
                 Your outstanding charge is ₦{{price}}. Please settle your outstanding charges \
                 promptly.\n\nThank you."
            }
            Self::LandUseCharge => {
                "Dear {{name}},\n\nThis is a notice regarding your Land Use Charge for property \
                 (ID: {{propertyId}}). The amount due is ₦{{price}}. Kindly ensure payment is made \
                 to avoid penalties.\n\nThank you."
            }
        }
    }
}

impl fmt::Display for NoticeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Fill the placeholders of `template` for `owner`.
pub fn render_template(template: &str, owner: &PropertyOwner) -> String {
    template
        .replace("{{name}}", &owner.name)
        .replace("{{propertyId}}", &owner.property_id)
        .replace("{{price}}", &group_thousands(owner.price))
}

/// Summary cards of the notice center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeAnalytics {
    pub total_notices: u32,
    pub total_outstanding: u64,
    pub paid: u32,
    pub unpaid: u32,
}

impl NoticeAnalytics {
    /// Analytics for `owners`. Paid/unpaid counts are fixed demo figures.
    pub fn for_owners(owners: &[PropertyOwner]) -> Self {
        Self {
            total_notices: 20,
            total_outstanding: owners.iter().map(|owner| owner.price).sum(),
            paid: 7,
            unpaid: 13,
        }
    }
}

/// State of the notice center page.
#[derive(Debug, Clone, Default)]
pub struct DemandNoticeState {
    pub owners: Vec<PropertyOwner>,
    selected: BTreeSet<u32>,
    template: NoticeTemplate,
    /// Replaces the template body when not empty.
    pub custom_message: String,
    preview_owner: Option<u32>,
    last_sent: Option<DateTime<Utc>>,
}

impl DemandNoticeState {
    pub fn new(owners: Vec<PropertyOwner>) -> Self {
        Self {
            owners,
            ..Self::default()
        }
    }

    pub fn analytics(&self) -> NoticeAnalytics {
        NoticeAnalytics::for_owners(&self.owners)
    }

    pub fn is_selected(&self, owner_id: u32) -> bool {
        self.selected.contains(&owner_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected owners in list order.
    pub fn selected_owners(&self) -> impl Iterator<Item = &PropertyOwner> {
        self.owners
            .iter()
            .filter(|owner| self.selected.contains(&owner.id))
    }

    /// Select or deselect `owner_id`. Deselecting the previewed owner closes
    /// the preview.
    pub fn toggle_owner(&mut self, owner_id: u32) {
        if !self.selected.remove(&owner_id) {
            self.selected.insert(owner_id);
        } else if self.preview_owner == Some(owner_id) {
            self.preview_owner = None;
        }
        debug!("Owner {owner_id} selected: {}", self.is_selected(owner_id));
    }

    pub fn select_all(&mut self) {
        self.selected = self.owners.iter().map(|owner| owner.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.preview_owner = None;
    }

    pub fn template(&self) -> NoticeTemplate {
        self.template
    }

    pub fn set_template(&mut self, template: NoticeTemplate) {
        self.template = template;
    }

    pub fn set_custom_message(&mut self, message: impl Into<String>) {
        self.custom_message = message.into();
    }

    /// Preview the message for `owner_id`. Only selected owners can be
    /// previewed; returns whether the preview opened.
    pub fn open_preview(&mut self, owner_id: u32) -> bool {
        if !self.is_selected(owner_id) {
            debug!("Ignoring preview for unselected owner {owner_id}");
            return false;
        }
        self.preview_owner = Some(owner_id);
        true
    }

    pub fn close_preview(&mut self) {
        self.preview_owner = None;
    }

    pub fn preview_owner(&self) -> Option<&PropertyOwner> {
        let id = self.preview_owner?;
        self.owners.iter().find(|owner| owner.id == id)
    }

    /// The message body in effect: the custom message, else the template.
    pub fn message_template(&self) -> &str {
        if self.custom_message.is_empty() {
            self.template.body()
        } else {
            &self.custom_message
        }
    }

    pub fn render_message(&self, owner: &PropertyOwner) -> String {
        render_template(self.message_template(), owner)
    }

    /// Send the notice to the current selection.
    ///
    /// Returns the number of recipients; nothing happens with an empty
    /// selection.
    pub fn send(&mut self, now: DateTime<Utc>) -> usize {
        let recipients = self.selected_count();
        if recipients == 0 {
            debug!("Send requested with no owners selected");
            return 0;
        }
        info!(
            "Sending {} notice to {recipients} owner(s)",
            self.template.title()
        );
        self.last_sent = Some(now);
        recipients
    }

    pub fn last_sent(&self) -> Option<DateTime<Utc>> {
        self.last_sent
    }

    /// Whether the success banner is still showing at `now`.
    pub fn sent_banner_visible(&self, now: DateTime<Utc>) -> bool {
        self.last_sent.is_some_and(|sent| {
            now >= sent && now - sent < Duration::seconds(SENT_BANNER_SECONDS)
        })
    }
}

/// Demo property owners with outstanding charges.
pub fn mock_owners() -> Vec<PropertyOwner> {
    [
        ("John Adamu", "JN-12345", "08012345678", 50_000),
        ("Jane Musa", "JS-54321", "08023456789", 120_000),
        ("Ali Bello", "MG-67890", "08034567890", 80_000),
        ("Grace Obi", "BK-11223", "08045678901", 70_000),
        ("Samuel Okoro", "KN-33445", "08056789012", 95_000),
        ("Fatima Sani", "KT-55667", "08067890123", 60_000),
        ("Peter Eze", "EN-77889", "08078901234", 110_000),
        ("Ngozi Uche", "AB-99001", "08089012345", 105_000),
        ("Bola Tinubu", "LA-11223", "08090123456", 130_000),
        ("Aisha Buhari", "FC-22334", "08012349876", 90_000),
        ("Chinedu Obi", "AN-33445", "08023456781", 75_000),
        ("Maryam Abubakar", "KD-44556", "08034567812", 115_000),
        ("Ibrahim Musa", "KN-55667", "08045678123", 98_000),
        ("Blessing Okafor", "IM-66778", "08056781234", 102_000),
        ("Emeka Nwosu", "EB-77889", "08067812345", 87_000),
        ("Halima Yusuf", "SO-88990", "08078123456", 108_000),
        ("Tunde Bakare", "OG-99001", "08081234567", 125_000),
        ("Rita Dominic", "CR-10112", "08092345678", 112_000),
        ("Yakubu Dogara", "BO-21223", "08013456789", 97_000),
        ("Funke Akindele", "OS-32334", "08024567891", 99_000),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, property_id, phone, price), id)| PropertyOwner {
        id,
        name: name.to_owned(),
        property_id: property_id.to_owned(),
        phone: phone.to_owned(),
        price,
    })
    .collect()
}
