use shared::InviteList;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InviteGuestsModalProps {
    pub emails_to_invite: InviteList,
    /// Submit of the add-guest form; the handler reads the `email` field
    pub on_add_email: Callback<SubmitEvent>,
    pub on_remove_email: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(InviteGuestsModal)]
pub fn invite_guests_modal(props: &InviteGuestsModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal invite-guests-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Select guests"}</h3>
                    <button type="button" class="modal-close" onclick={on_close_click}>{"✕"}</button>
                </div>
                <p class="modal-subtitle">
                    {"Guests will receive an email to confirm they are joining the trip."}
                </p>

                <div class="guest-chips">
                    {if props.emails_to_invite.is_empty() {
                        html! { <span class="guest-chips-empty">{"No guests yet"}</span> }
                    } else {
                        html! {
                            <>
                            {for props.emails_to_invite.iter().map(|email| {
                                let on_remove = {
                                    let on_remove_email = props.on_remove_email.clone();
                                    let email = email.clone();
                                    Callback::from(move |_: MouseEvent| on_remove_email.emit(email.clone()))
                                };
                                html! {
                                    <div class="guest-chip" key={email.clone()}>
                                        <span class="guest-email">{email.clone()}</span>
                                        <button
                                            type="button"
                                            class="guest-remove"
                                            title={format!("Remove {}", email)}
                                            onclick={on_remove}
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                }
                            })}
                            </>
                        }
                    }}
                </div>

                <div class="modal-divider" />

                <form class="add-guest-form" onsubmit={props.on_add_email.clone()}>
                    <span class="input-icon">{"@"}</span>
                    <input
                        type="email"
                        name="email"
                        class="step-input"
                        placeholder="Guest email"
                        required=true
                    />
                    <button type="submit" class="btn btn-primary">
                        {"Invite +"}
                    </button>
                </form>
            </div>
        </div>
    }
}
