//! Contact link derivation for the shelter detail view

use serde::{Deserialize, Serialize};

use crate::models::ContactInfo;

const LINE_ADD_FRIEND_URL: &str = "https://line.me/R/ti/p/";

/// Ways a shelter can be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    Line,
    Phone,
    Facebook,
    Instagram,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 4] = [
        ContactChannel::Line,
        ContactChannel::Phone,
        ContactChannel::Facebook,
        ContactChannel::Instagram,
    ];
}

/// URL to open for `channel`, or `None` when the shelter does not offer it
pub fn contact_url(contact: &ContactInfo, channel: ContactChannel) -> Option<String> {
    match channel {
        ContactChannel::Line => non_empty(contact.line.as_deref()).map(|line| {
            if line.starts_with("http") {
                line.to_string()
            } else {
                format!("{LINE_ADD_FRIEND_URL}{line}")
            }
        }),
        ContactChannel::Phone => non_empty(contact.phone.as_deref())
            .map(|phone| format!("tel:{}", phone.replace('-', ""))),
        ContactChannel::Facebook => non_empty(contact.facebook.as_deref()).map(str::to_string),
        ContactChannel::Instagram => non_empty(contact.instagram.as_deref()).map(str::to_string),
    }
}

/// A handle that is present and not blank
fn non_empty(handle: Option<&str>) -> Option<&str> {
    handle.filter(|handle| !handle.trim().is_empty())
}

/// Channels that resolve to a URL, in display order
pub fn available_channels(contact: &ContactInfo) -> Vec<ContactChannel> {
    ContactChannel::ALL
        .into_iter()
        .filter(|channel| contact_url(contact, *channel).is_some())
        .collect()
}
