//! Recursive rendering of the referral tree.

use leptos::prelude::*;

use crate::net::types::ReferralNode;

/// Referral tree rooted at the signed-in user's node.
///
/// The tree is rendered as-is from the last profile fetch; depth comes
/// from the server contract, nothing is validated or collapsed here.
#[component]
pub fn ReferralTree(node: ReferralNode) -> impl IntoView {
    view! { <ul class="referral-tree">{render_node(&node)}</ul> }
}

fn render_node(node: &ReferralNode) -> AnyView {
    let children: Vec<AnyView> = node.children.iter().map(render_node).collect();

    view! {
        <li class="referral-tree__node">
            <span class="referral-tree__login">{node.login.clone()}</span>
            <span class="referral-tree__code">{node.referral_code.clone()}</span>
            {(!children.is_empty())
                .then(move || view! { <ul class="referral-tree__children">{children}</ul> })}
        </li>
    }
    .into_any()
}
