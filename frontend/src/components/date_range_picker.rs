use chrono::Datelike;
use shared::DateRange;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::services::date_utils::*;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Currently selected range
    pub range: DateRange,
    /// Called with the new range after every day click
    pub on_change: Callback<DateRange>,
    pub disabled: bool,
    #[prop_or_default]
    pub placeholder: Option<String>,
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();

    let today = today();
    let calendar_month = use_state(|| {
        props
            .range
            .from
            .map(|from| (from.year(), from.month()))
            .unwrap_or((today.year(), today.month()))
    });

    let display_text = props
        .range
        .display()
        .or_else(|| props.placeholder.clone())
        .unwrap_or_else(|| "When?".to_string());

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    // Close when clicking outside the picker
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = match (*is_open, window()) {
                (true, Some(window)) => Some(gloo::events::EventListener::new(&window, "click", move |e| {
                    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    if let Some(picker) = calendar_ref.cast::<Element>() {
                        if !picker.contains(Some(&element)) {
                            show_calendar.set(false);
                        }
                    }
                })),
                _ => None,
            };

            move || drop(listener)
        });
    }

    let change_month = |delta: i32| {
        let calendar_month = calendar_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *calendar_month;
            calendar_month.set(shift_month(year, month, delta));
        })
    };

    let (year, month) = *calendar_month;
    let calendar_days = generate_calendar_days(year, month);

    html! {
        <div class="date-range-picker" ref={calendar_ref}>
            <button
                type="button"
                class={classes!("date-display-button", props.range.is_empty().then(|| "placeholder"))}
                onclick={toggle_calendar}
                disabled={props.disabled}
            >
                <span class="calendar-icon">{"📅"}</span>
                <span class="date-text">{display_text}</span>
            </button>

            {if *show_calendar && !props.disabled {
                html! {
                    <div class="calendar-dropdown">
                        <div class="calendar-header">
                            <button type="button" class="nav-button" onclick={change_month(-1)}>{"‹"}</button>
                            <span class="month-year">{format!("{} {}", month_name(month), year)}</span>
                            <button type="button" class="nav-button" onclick={change_month(1)}>{"›"}</button>
                        </div>

                        <div class="calendar-grid">
                            <div class="weekday-header">
                                <span>{"Sun"}</span>
                                <span>{"Mon"}</span>
                                <span>{"Tue"}</span>
                                <span>{"Wed"}</span>
                                <span>{"Thu"}</span>
                                <span>{"Fri"}</span>
                                <span>{"Sat"}</span>
                            </div>

                            <div class="calendar-days">
                                {for calendar_days.iter().map(|day| {
                                    let date = day.date;
                                    let selectable = is_selectable(date, today);
                                    let in_range = props.range.contains_day(date);
                                    let is_start = props.range.from.map(|from| from.date_naive() == date).unwrap_or(false);
                                    let is_end = props.range.to.map(|to| to.date_naive() == date).unwrap_or(false);
                                    let onclick = {
                                        let range = props.range;
                                        let on_change = props.on_change.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_change.emit(range.select_day(date));
                                        })
                                    };

                                    html! {
                                        <button
                                            type="button"
                                            class={classes!(
                                                "calendar-day",
                                                day.is_current_month.then(|| "current-month"),
                                                (!day.is_current_month).then(|| "other-month"),
                                                (!selectable).then(|| "invalid"),
                                                in_range.then(|| "selected"),
                                                is_start.then(|| "range-start"),
                                                is_end.then(|| "range-end"),
                                                (date == today).then(|| "today")
                                            )}
                                            disabled={!selectable}
                                            onclick={onclick}
                                        >
                                            {date.day()}
                                        </button>
                                    }
                                })}
                            </div>
                        </div>

                        <div class="calendar-footer">
                            <button
                                type="button"
                                class="done-button"
                                disabled={!props.range.is_complete()}
                                onclick={
                                    let show_calendar = show_calendar.clone();
                                    Callback::from(move |_: MouseEvent| show_calendar.set(false))
                                }
                            >
                                {"Done"}
                            </button>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
