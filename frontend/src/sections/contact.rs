use std::rc::Rc;

use launchpad_shared::{
    sections::contact::{
        ContactContent, ContactField, ContactForm, ContactLink, ContactVariant, FieldKind,
        FieldValue, FormPayload,
    },
    Block, IconName, Section,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{
    components::{
        icons::Icon,
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    i18n::current::contact as t,
};

/// How long the confirmation line stays after a submit, in milliseconds.
const SENT_NOTICE_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
    #[prop_or_default]
    pub variant: ContactVariant,
    /// Receives a snapshot of every field that has been touched.
    #[prop_or_default]
    pub on_submit: Callback<FormPayload>,
}

#[derive(Default, PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
    type Action = (String, FieldValue);

    fn reduce(self: Rc<Self>, (name, value): Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.set(name, value);
        Rc::new(Self(next))
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ContactProps {
        content,
        variant,
        on_submit,
    } = props;
    let outline = content.outline(*variant);

    if outline.has(Block::FloatingLink) {
        return whatsapp_float(content);
    }

    let body = if outline.has(Block::Form) {
        html! {
            <ContactFormView
                fields={content.fields.clone()}
                on_submit={on_submit.clone()}
                class={variant.layout_class()}
            />
        }
    } else if outline.has(Block::Actions) {
        link_list(*variant, &content.cta)
    } else {
        Html::default()
    };

    html! {
        <section id="contact" class={classes!("px-6", "py-20", "md:px-16", variant.surface_class())}>
            <div class="max-w-3xl mx-auto flex flex-col items-center">
                <SectionHeading
                    outline={outline}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class="items-center text-center"
                />
                { body }
            </div>
        </section>
    }
}

fn whatsapp_float(content: &ContactContent) -> Html {
    let Some(href) = content.whatsapp_url() else {
        return Html::default();
    };
    let placement = ContactVariant::WhatsappFloat.layout_class();
    html! {
        <a
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={t::WHATSAPP_ARIA}
            title={t::WHATSAPP_ARIA}
            class={classes!(
                placement,
                "flex",
                "h-14",
                "w-14",
                "items-center",
                "justify-center",
                "rounded-full",
                "bg-green-500",
                "text-white",
                "shadow-lg",
                "transition",
                "hover:scale-110"
            )}
        >
            <Icon name={IconName::MessageCircle} size={28} />
        </a>
    }
}

fn link_list(variant: ContactVariant, links: &[ContactLink]) -> Html {
    // A float without a number degrades to the plain link list.
    let variant = match variant {
        ContactVariant::WhatsappFloat => ContactVariant::Minimal,
        other => other,
    };
    let item = match variant {
        ContactVariant::Cards => {
            "flex items-center gap-3 rounded-xl border border-[var(--border)] p-6 shadow-sm \
             hover:shadow-md"
        },
        ContactVariant::Banner => "inline-flex items-center gap-2 rounded-lg bg-white/15 px-5 py-3 font-semibold hover:bg-white/25",
        _ => "inline-flex items-center gap-2 underline hover:text-[var(--primary)]",
    };

    html! {
        <div class={variant.layout_class()}>
            { for links.iter().enumerate().map(|(index, link)| html! {
                <Reveal motion={Motion::FadeUp} index={index}>
                    <a href={link.href.clone()} class={item}>
                        if let Some(icon) = link.icon {
                            <Icon name={icon} size={20} />
                        }
                        <span>{ &link.label }</span>
                    </a>
                </Reveal>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormViewProps {
    fields: Vec<ContactField>,
    on_submit: Callback<FormPayload>,
    class: Classes,
}

#[function_component(ContactFormView)]
fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let form = use_reducer(FormState::default);
    let sent = use_state(|| false);

    let hide_notice = {
        let sent = sent.clone();
        use_timeout(move || sent.set(false), SENT_NOTICE_MS)
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(form.0.submit());
            sent.set(true);
            // restarts the countdown on repeated submits
            hide_notice.reset();
        })
    };

    let set = form.dispatcher();

    html! {
        <form class={props.class.clone()} {onsubmit}>
            { for props.fields.iter().map(|field| field_view(field, form.0.value(&field.name), set.clone())) }
            <button
                type="submit"
                class="self-start rounded-lg bg-[var(--primary)] px-6 py-3 font-semibold text-white transition hover:opacity-90"
            >
                { t::SUBMIT }
            </button>
            if *sent {
                <p class="text-sm text-green-600" role="status">{ t::SENT }</p>
            }
        </form>
    }
}

const INPUT_CLASS: &str = "w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] px-4 py-2 \
                           focus:outline-none focus:ring-2 focus:ring-[var(--primary)]";

fn field_view(
    field: &ContactField,
    value: Option<&FieldValue>,
    set: UseReducerDispatcher<FormState>,
) -> Html {
    let name = field.name.clone();
    let text = value.map(FieldValue::as_text).unwrap_or_default().to_string();
    let label = html! {
        <span class="text-sm font-medium">
            { &field.label }
            if field.required {
                <span class="text-red-500" aria-hidden="true">{ " *" }</span>
            }
        </span>
    };

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    set.dispatch((name.clone(), FieldValue::Text(input.value())));
                }
            });
            html! {
                <label class="flex flex-col gap-2">
                    { label }
                    <input
                        class={INPUT_CLASS}
                        type={field.kind.as_str()}
                        name={field.name.clone()}
                        placeholder={field.placeholder.clone()}
                        required={field.required}
                        value={text}
                        {oninput}
                    />
                </label>
            }
        },
        FieldKind::Textarea => {
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                    set.dispatch((name.clone(), FieldValue::Text(input.value())));
                }
            });
            html! {
                <label class="flex flex-col gap-2">
                    { label }
                    <textarea
                        class={INPUT_CLASS}
                        rows="5"
                        name={field.name.clone()}
                        placeholder={field.placeholder.clone()}
                        required={field.required}
                        value={text}
                        {oninput}
                    />
                </label>
            }
        },
        FieldKind::Select => {
            let onchange = Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                    set.dispatch((name.clone(), FieldValue::Text(select.value())));
                }
            });
            html! {
                <label class="flex flex-col gap-2">
                    { label }
                    <select class={INPUT_CLASS} name={field.name.clone()} required={field.required} {onchange}>
                        <option value="" selected={text.is_empty()} disabled=true>
                            { field.placeholder.as_deref().unwrap_or(t::SELECT_PLACEHOLDER) }
                        </option>
                        { for field.options.iter().map(|option| html! {
                            <option value={option.clone()} selected={*option == text}>{ option }</option>
                        }) }
                    </select>
                </label>
            }
        },
        FieldKind::Checkbox => {
            let checked = value.is_some_and(FieldValue::is_checked);
            let onchange = Callback::from(move |event: Event| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    set.dispatch((name.clone(), FieldValue::Checked(input.checked())));
                }
            });
            html! {
                <label class="flex items-center gap-3">
                    <input
                        type="checkbox"
                        class="h-4 w-4"
                        name={field.name.clone()}
                        required={field.required}
                        {checked}
                        {onchange}
                    />
                    { label }
                </label>
            }
        },
        FieldKind::Radio => html! {
            <fieldset class="flex flex-col gap-2">
                <legend class="mb-1">{ label }</legend>
                { for field.options.iter().map(|option| {
                    let onchange = {
                        let set = set.clone();
                        let name = name.clone();
                        let option = option.clone();
                        Callback::from(move |_: Event| set.dispatch((name.clone(), FieldValue::Text(option.clone()))))
                    };
                    html! {
                        <label class="flex items-center gap-2">
                            <input
                                type="radio"
                                name={field.name.clone()}
                                value={option.clone()}
                                checked={*option == text}
                                required={field.required}
                                {onchange}
                            />
                            <span>{ option }</span>
                        </label>
                    }
                }) }
            </fieldset>
        },
    }
}
