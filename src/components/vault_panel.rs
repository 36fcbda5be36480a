//! Vault Panel Component
//!
//! Set-password, unlock and content panes of the vault page. The pane
//! follows the gate state; every change closes the current pane, waits
//! for the modal transition and then shows the next one.

use hub_core::{ConfirmRequest, InputField, ListType, VaultError, VaultState};
use leptos::ev;
use leptos::prelude::*;

use crate::components::confirm_modal::use_confirm;
use crate::components::ListCard;
use crate::storage::with_hub;
use crate::store::{store_refresh, use_hub_store, HubStateStoreFields};
use crate::timing::{focus_later, FieldFlash, TimerSlot, MODAL_TRANSITION_MS};

#[component]
pub fn VaultPanel() -> impl IntoView {
    let store = use_hub_store();

    let gate_state = Memo::new(move |_| {
        let _ = store.revision().get();
        with_hub(|hub| hub.vault().state())
    });

    let displayed = RwSignal::new(gate_state.get_untracked());
    let pane_active = RwSignal::new(true);
    let transition = TimerSlot::new();
    let focus = TimerSlot::new();

    let unlock_ref = NodeRef::<leptos::html::Input>::new();
    let new_password_ref = NodeRef::<leptos::html::Input>::new();

    let enter_pane = move |state: VaultState| {
        displayed.set(state);
        pane_active.set(true);
        match state {
            VaultState::Locked => focus_later(focus, unlock_ref),
            VaultState::NoPasswordSet => focus_later(focus, new_password_ref),
            VaultState::Unlocked => focus.cancel(),
        }
    };

    // Pane swaps wait for the close transition
    Effect::new(move |prev: Option<VaultState>| {
        let state = gate_state.get();
        match prev {
            None => enter_pane(state),
            Some(prev) if prev != state => {
                log::info!("[Vault] {:?} -> {:?}", prev, state);
                pane_active.set(false);
                transition.schedule(MODAL_TRANSITION_MS, move || enter_pane(state));
            }
            Some(_) => {}
        }
        state
    });

    // Returning from the back/forward cache re-runs state determination
    let handle = window_event_listener(ev::pageshow, move |ev| {
        if ev.persisted() {
            log::debug!("[Vault] restored from page cache, re-initializing");
            store_refresh(&store);
            enter_pane(with_hub(|hub| hub.vault().state()));
        }
    });
    on_cleanup(move || handle.remove());

    let overlay_class = move || if pane_active.get() { "modal-overlay active" } else { "modal-overlay" };

    move || match displayed.get() {
        VaultState::NoPasswordSet => view! {
            <div class=overlay_class>
                <SetPasswordPane first_ref=new_password_ref />
            </div>
        }.into_any(),
        VaultState::Locked => view! {
            <div class=overlay_class>
                <UnlockPane input_ref=unlock_ref />
            </div>
        }.into_any(),
        VaultState::Unlocked => view! {
            <div class="vault-content">
                <ListCard list=ListType::VaultNotes />
                <ListCard list=ListType::VaultLinks />
            </div>
        }.into_any(),
    }
}

#[component]
fn UnlockPane(input_ref: NodeRef<leptos::html::Input>) -> impl IntoView {
    let store = use_hub_store();
    let confirm = use_confirm();
    let flash = FieldFlash::new();

    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let forgot_visible = Memo::new(move |_| {
        let _ = store.revision().get();
        with_hub(|hub| hub.vault().forgot_password_visible())
    });

    let unlock = move || {
        let attempt = password.get_untracked();
        password.set(String::new());
        match with_hub(|hub| hub.vault().unlock(&attempt)) {
            Ok(_) => error.set(None),
            Err(e @ VaultError::IncorrectPassword { .. }) => {
                error.set(Some(e.to_string()));
                flash.flag(vec![InputField::Name]);
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            Err(e) => log::warn!("[Vault] unlock failed: {}", e),
        }
        // attempt counter or session flag changed either way
        store_refresh(&store);
    };

    view! {
        <div class="modal-content">
            <h3>"Enter Vault Password"</h3>
            <PasswordField
                value=password
                node_ref=input_ref
                placeholder="Password"
                flash=flash
                on_enter=move |_| unlock()
            />
            <p class=move || if error.with(Option::is_some) { "error-message show" } else { "error-message" }>
                {move || error.get().unwrap_or_default()}
            </p>
            <button class="modal-btn" on:click=move |_| unlock()>"Unlock"</button>
            <Show when=move || forgot_visible.get()>
                <div class="forgot-password">
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            confirm.request(store, ConfirmRequest::reset_vault());
                        }
                    >
                        "Forgot Password?"
                    </a>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SetPasswordPane(first_ref: NodeRef<leptos::html::Input>) -> impl IntoView {
    let store = use_hub_store();

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let second_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move || {
        let result = with_hub(|hub| {
            hub.vault().set_password(&password.get_untracked(), &confirmation.get_untracked())
        });
        match result {
            Ok(_) => {
                error.set(String::new());
                store_refresh(&store);
            }
            Err(e) => error.set(e.to_string()),
        }
    };

    view! {
        <div class="modal-content">
            <h3>"Set Vault Password"</h3>
            <PasswordField
                value=password
                node_ref=first_ref
                placeholder="New password"
                on_enter=move |_| {
                    if let Some(input) = second_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
            />
            <PasswordField
                value=confirmation
                node_ref=second_ref
                placeholder="Confirm password"
                on_enter=move |_| submit()
            />
            <p class="error-message show">{move || error.get()}</p>
            <button class="modal-btn" on:click=move |_| submit()>"Set Password"</button>
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
fn PasswordField(
    value: RwSignal<String>,
    node_ref: NodeRef<leptos::html::Input>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] flash: Option<FieldFlash>,
    #[prop(into)] on_enter: Callback<()>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-field">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                node_ref=node_ref
                placeholder=placeholder
                class=move || match flash {
                    Some(flash) => flash.class("password-input", InputField::Name),
                    None => "password-input".to_string(),
                }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_enter.run(());
                    }
                }
            />
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
