use shared::InviteList;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InviteGuestsStepProps {
    pub emails_to_invite: InviteList,
    #[prop_or_default]
    pub guests_error: Option<String>,
    pub on_open_guests_modal: Callback<()>,
    pub on_open_confirm_modal: Callback<()>,
}

#[function_component(InviteGuestsStep)]
pub fn invite_guests_step(props: &InviteGuestsStepProps) -> Html {
    let on_open_guests = {
        let on_open = props.on_open_guests_modal.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let on_confirm = {
        let on_open = props.on_open_confirm_modal.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let summary_class = classes!(
        "guests-summary",
        props.emails_to_invite.is_empty().then(|| "placeholder")
    );

    html! {
        <section class="trip-step invite-guests-step">
            <div class="trip-step-row">
                <button type="button" class="guests-summary-button" onclick={on_open_guests}>
                    <span class="input-icon">{"👥"}</span>
                    <span class={summary_class}>{props.emails_to_invite.summary()}</span>
                </button>

                <div class="step-divider" />

                <button type="button" class="btn btn-primary" onclick={on_confirm}>
                    {"Confirm trip →"}
                </button>
            </div>

            {for props.guests_error.iter().map(|error| html! {
                <div class="form-message error">{error}</div>
            })}
        </section>
    }
}
