use shared::DateRange;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::date_range_picker::DateRangePicker;

#[derive(Properties, PartialEq)]
pub struct DestinationAndDateStepProps {
    pub destination: String,
    pub date_range: DateRange,
    pub guests_input_open: bool,
    #[prop_or_default]
    pub destination_error: Option<String>,
    #[prop_or_default]
    pub date_range_error: Option<String>,

    pub on_destination_change: Callback<String>,
    pub on_date_range_change: Callback<DateRange>,
    pub on_open_guests_input: Callback<()>,
    pub on_close_guests_input: Callback<()>,
}

#[function_component(DestinationAndDateStep)]
pub fn destination_and_date_step(props: &DestinationAndDateStepProps) -> Html {
    let on_destination_input = {
        let on_destination_change = props.on_destination_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_destination_change.emit(input.value());
        })
    };

    let on_continue = {
        let on_open = props.on_open_guests_input.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    let on_change_details = {
        let on_close = props.on_close_guests_input.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <section class="trip-step destination-and-date-step">
            <div class="trip-step-row">
                <div class="form-group destination-group">
                    <span class="input-icon">{"📍"}</span>
                    <input
                        type="text"
                        id="destination"
                        class={classes!("step-input", props.destination_error.is_some().then(|| "has-error"))}
                        placeholder="Where are you going?"
                        value={props.destination.clone()}
                        oninput={on_destination_input}
                        disabled={props.guests_input_open}
                    />
                </div>

                <DateRangePicker
                    range={props.date_range}
                    on_change={props.on_date_range_change.clone()}
                    disabled={props.guests_input_open}
                    placeholder={Some("When?".to_string())}
                />

                <div class="step-divider" />

                {if props.guests_input_open {
                    html! {
                        <button type="button" class="btn btn-secondary" onclick={on_change_details}>
                            {"Change place/date ⚙️"}
                        </button>
                    }
                } else {
                    html! {
                        <button type="button" class="btn btn-primary" onclick={on_continue}>
                            {"Continue →"}
                        </button>
                    }
                }}
            </div>

            {for props.destination_error.iter().map(|error| html! {
                <div class="form-message error">{error}</div>
            })}
            {for props.date_range_error.iter().map(|error| html! {
                <div class="form-message error">{error}</div>
            })}
        </section>
    }
}
