use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::settings::{
    GeneralSettings, SelectOption, SettingsTab, CURRENCY_OPTIONS, DATE_FORMAT_OPTIONS,
    LANGUAGE_OPTIONS, PREFERENCE_TOGGLES, TIMEZONE_OPTIONS,
};
use leptos::prelude::*;
use thaw::*;

type Getter = fn(&GeneralSettings) -> String;
type Setter = fn(&mut GeneralSettings, String);

fn text_field(
    form: RwSignal<GeneralSettings>,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

fn select_field(
    form: RwSignal<GeneralSettings>,
    label: &'static str,
    options: &'static [SelectOption],
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn GeneralSettingsForm(form: RwSignal<GeneralSettings>) -> impl IntoView {
    let toggles = PREFERENCE_TOGGLES
        .into_iter()
        .map(|spec| {
            view! {
                <div class="toggle-row">
                    <div class="toggle-row__text">
                        <label for=spec.id>{spec.label}</label>
                        <span class="text-muted">{spec.hint}</span>
                    </div>
                    <input
                        type="checkbox"
                        class="switch"
                        id=spec.id
                        prop:checked=move || form.with(|f| f.toggle(spec.id).unwrap_or(false))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| {
                                if !f.set_toggle(spec.id, checked) {
                                    log::warn!(target: "settings", "unknown toggle {}", spec.id);
                                }
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="settings-section">
            <h3 class="settings-section__title">"Business Information"</h3>
            <div class="details-form details-form--grid">
                {text_field(form, "Business Name", "text", |f| f.business_name.clone(), |f, v| f.business_name = v)}
                {text_field(form, "Email Address", "email", |f| f.business_email.clone(), |f, v| f.business_email = v)}
                {text_field(form, "Phone Number", "tel", |f| f.business_phone.clone(), |f, v| f.business_phone = v)}
                {text_field(form, "Address", "text", |f| f.business_address.clone(), |f, v| f.business_address = v)}
            </div>
        </div>

        <div class="settings-section">
            <h3 class="settings-section__title">"Regional Settings"</h3>
            <div class="details-form details-form--grid">
                {select_field(form, "Timezone", &TIMEZONE_OPTIONS, |f| f.timezone.clone(), |f, v| f.timezone = v)}
                {select_field(form, "Currency", &CURRENCY_OPTIONS, |f| f.currency.clone(), |f, v| f.currency = v)}
                {select_field(form, "Date Format", &DATE_FORMAT_OPTIONS, |f| f.date_format.clone(), |f, v| f.date_format = v)}
                {select_field(form, "Language", &LANGUAGE_OPTIONS, |f| f.language.clone(), |f, v| f.language = v)}
            </div>
        </div>

        <div class="settings-section">
            <h3 class="settings-section__title">"System Preferences"</h3>
            {toggles}
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::default());
    let form = RwSignal::new(GeneralSettings::default());
    let saved = RwSignal::new(false);

    // Любая правка снимает отметку о сохранении
    Effect::new(move |_| {
        form.track();
        saved.set(false);
    });

    let save = move |_| {
        form.with_untracked(|f| f.log_save());
        saved.set(true);
    };

    let reset = move |_| form.set(GeneralSettings::default());

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" icon_name="settings" subtitle="Configure your store and account".to_string()>
                {()}
            </PageHeader>

            <div class="settings-layout">
                <nav class="settings-nav">
                    {SettingsTab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                class="settings-nav__item"
                                class:settings-nav__item--active=move || active.get() == tab
                                on:click=move |_| active.set(tab)
                            >
                                {icon(tab.icon())}
                                <span>{tab.label()}</span>
                            </button>
                        })
                        .collect_view()}
                </nav>

                <div class="card settings-content">
                    <div class="card__header">
                        <div>
                            <h2 class="card__title">{move || active.get().title()}</h2>
                            <p class="text-muted">{move || active.get().description()}</p>
                        </div>
                    </div>

                    {move || match active.get() {
                        SettingsTab::General => view! {
                            <GeneralSettingsForm form=form />
                            <div class="settings-actions">
                                {move || saved.get().then(|| view! {
                                    <span class="settings-actions__saved">{icon("check-circle")}"Settings saved"</span>
                                })}
                                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                                    "Reset"
                                </Button>
                                <Button appearance=ButtonAppearance::Primary on_click=save>
                                    {icon("save")}
                                    "Save Changes"
                                </Button>
                            </div>
                        }
                        .into_any(),
                        other => view! {
                            <div class="settings-empty">
                                {icon(other.icon())}
                                <p>{format!("{} settings are not configurable in this demo.", other.label())}</p>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
