//! Token and coupon counters for the navbar.

use dioxus::prelude::*;

use crate::provider::use_session;

/// Shows the remaining token balance and coupon count.
///
/// Renders nothing while logged out.
#[component]
pub fn TokenBalance(#[props(default = "".to_string())] class: String) -> Element {
    let session = use_session();
    let store = session.read();

    if !store.login_state() {
        return rsx! {};
    }

    let token = store.get_token();
    let coupon = store.coupon();
    let nickname = store.nickname().to_string();

    rsx! {
        span {
            class: "token-balance {class}",
            title: "{nickname}",
            span { class: "token-balance__tokens", "{token} tokens" }
            span { class: "token-balance__coupons", "{coupon} coupons" }
        }
    }
}
