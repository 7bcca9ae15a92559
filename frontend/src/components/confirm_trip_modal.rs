use shared::{DateRange, FieldErrors, FormField, Submission};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmTripModalProps {
    pub destination: String,
    pub date_range: DateRange,
    pub owner_name: String,
    pub owner_email: String,
    pub field_errors: FieldErrors,
    pub submission: Submission,

    pub on_owner_name_change: Callback<String>,
    pub on_owner_email_change: Callback<String>,
    pub on_create_trip: Callback<SubmitEvent>,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmTripModal)]
pub fn confirm_trip_modal(props: &ConfirmTripModalProps) -> Html {
    let is_submitting = props.submission.is_locked();

    let on_name_input = {
        let on_change = props.on_owner_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_email_input = {
        let on_change = props.on_owner_email_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

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

    // Errors for fields that live outside this modal
    let step_errors: Vec<&str> = props
        .field_errors
        .iter()
        .filter(|(field, _)| !matches!(field, FormField::OwnerName | FormField::OwnerEmail))
        .map(|(_, message)| message)
        .collect();

    let name_error = props.field_errors.get(FormField::OwnerName);
    let email_error = props.field_errors.get(FormField::OwnerEmail);

    let destination = if props.destination.is_empty() {
        "your destination".to_string()
    } else {
        props.destination.clone()
    };
    let dates = props
        .date_range
        .display()
        .map(|dates| format!(" on {}", dates))
        .unwrap_or_default();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal confirm-trip-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Confirm trip creation"}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        onclick={on_close_click}
                        disabled={is_submitting}
                    >
                        {"✕"}
                    </button>
                </div>
                <p class="modal-subtitle">
                    {"To confirm the trip to "}
                    <strong>{destination}</strong>
                    {dates}
                    {", fill in your details below."}
                </p>

                {if let Some(message) = props.submission.error_message() {
                    html! {
                        <div class="form-message error">
                            {format!("Could not create the trip. {}", message)}
                        </div>
                    }
                } else { html! {} }}

                {if !step_errors.is_empty() {
                    html! {
                        <div class="form-message error">
                            <ul>
                                {for step_errors.iter().map(|message| html! { <li>{*message}</li> })}
                            </ul>
                        </div>
                    }
                } else { html! {} }}

                <form class="confirm-trip-form" onsubmit={props.on_create_trip.clone()}>
                    <div class="form-group">
                        <span class="input-icon">{"👤"}</span>
                        <input
                            type="text"
                            name="name"
                            class={classes!("step-input", name_error.is_some().then(|| "has-error"))}
                            placeholder="Your full name"
                            value={props.owner_name.clone()}
                            oninput={on_name_input}
                            disabled={is_submitting}
                        />
                    </div>
                    {for name_error.map(|error| html! { <div class="field-error">{error}</div> })}

                    <div class="form-group">
                        <span class="input-icon">{"✉️"}</span>
                        <input
                            type="email"
                            name="email"
                            class={classes!("step-input", email_error.is_some().then(|| "has-error"))}
                            placeholder="Your personal email"
                            value={props.owner_email.clone()}
                            oninput={on_email_input}
                            disabled={is_submitting}
                        />
                    </div>
                    {for email_error.map(|error| html! { <div class="field-error">{error}</div> })}

                    <button type="submit" class="btn btn-primary btn-full" disabled={is_submitting}>
                        {if is_submitting {
                            "Creating trip..."
                        } else {
                            "Confirm trip creation"
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
