use crate::dom;
use crate::roster::{
    AddedMember, MemberFieldIds, Roster, SampleMember, SubmitState, CATEGORY_FIELD,
    LEADER_FIELDS, SAMPLE_CATEGORY, SAMPLE_LEADER, SAMPLE_MEMBERS, SAMPLE_TEAM_NAME,
    TEAM_NAME_FIELD, TERMS_FIELD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const FORM_ID: &str = "google-form";
const ADD_MEMBER_BUTTON_ID: &str = "add-member-btn";
const MEMBERS_CONTAINER_ID: &str = "members-container";
const MEMBER_COUNT_ID: &str = "member-count-display";
const HIDDEN_FRAME_ID: &str = "hidden_iframe";
const SUCCESS_MESSAGE_ID: &str = "form-success-message";

/// Team registration form: member cards, submit gating, and the hidden-frame
/// success hand-off.
#[derive(Clone)]
pub struct RegistrationForm {
    inner: Rc<FormInner>,
}

struct FormInner {
    document: web::Document,
    form: Option<web::HtmlFormElement>,
    add_button: Option<web::HtmlButtonElement>,
    members: Option<web::Element>,
    count_display: Option<web::HtmlElement>,
    roster: RefCell<Roster>,
    submit_state: RefCell<SubmitState>,
}

impl RegistrationForm {
    /// Wire whatever parts of the form exist on this page. `None` when the
    /// page has no registration form at all.
    pub fn wire(document: &web::Document) -> Option<Self> {
        let form: Option<web::HtmlFormElement> = dom::by_id(document, FORM_ID);
        let add_button: Option<web::HtmlButtonElement> = dom::by_id(document, ADD_MEMBER_BUTTON_ID);
        let members = document.get_element_by_id(MEMBERS_CONTAINER_ID);
        if form.is_none() && (add_button.is_none() || members.is_none()) {
            return None;
        }

        let this = Self {
            inner: Rc::new(FormInner {
                document: document.clone(),
                form,
                add_button,
                members,
                count_display: dom::by_id(document, MEMBER_COUNT_ID),
                roster: RefCell::new(Roster::new()),
                submit_state: RefCell::new(SubmitState::default()),
            }),
        };

        if let (Some(button), Some(_)) = (&this.inner.add_button, &this.inner.members) {
            let form = this.clone();
            dom::add_listener(button, "click", move |_| form.add_member());
        }
        if let Some(form_el) = &this.inner.form {
            let form = this.clone();
            dom::add_listener(form_el, "submit", move |ev| {
                ev.prevent_default();
                form.submit();
            });
            if let Some(frame) = document.get_element_by_id(HIDDEN_FRAME_ID) {
                let form = this.clone();
                dom::add_listener(&frame, "load", move |_| form.on_frame_load());
            }
        }
        Some(this)
    }

    #[inline]
    pub fn has_form(&self) -> bool {
        self.inner.form.is_some()
    }

    pub fn add_member(&self) {
        let inner = &self.inner;
        let Some(container) = &inner.members else {
            return;
        };
        let Some(added) = inner.roster.borrow_mut().add() else {
            return;
        };
        match build_member_card(&inner.document, &added) {
            Ok(card) => {
                _ = container.append_child(&card);
                if let Some(remove) = dom::query::<web::Element>(&card, ".remove-member-btn") {
                    let form = self.clone();
                    let card_for_remove = card.clone();
                    dom::add_listener(&remove, "click", move |_| {
                        form.remove_member(added.slot, &card_for_remove);
                    });
                }
            }
            Err(e) => {
                log::error!("[form] member card for slot {}: {:?}", added.slot, e);
                inner.roster.borrow_mut().remove(added.slot);
            }
        }
        self.refresh_count();
    }

    fn remove_member(&self, slot: usize, card: &web::Element) {
        card.remove();
        self.inner.roster.borrow_mut().remove(slot);
        self.refresh_count();
        self.relabel();
    }

    fn refresh_count(&self) {
        let inner = &self.inner;
        let roster = inner.roster.borrow();
        if let Some(display) = &inner.count_display {
            display.set_inner_text(&roster.total().to_string());
        }
        if let Some(button) = &inner.add_button {
            let can_add = roster.can_add();
            button.set_disabled(!can_add);
            dom::set_style(button, "opacity", if can_add { "1" } else { "0.5" });
            dom::set_style(button, "cursor", if can_add { "pointer" } else { "not-allowed" });
        }
    }

    fn relabel(&self) {
        let Some(container) = &self.inner.members else {
            return;
        };
        for (slot, label) in self.inner.roster.borrow().labels() {
            let selector = format!("[data-slot-index=\"{}\"] .badge-orange", slot);
            if let Some(badge) = dom::query::<web::HtmlElement>(container, &selector) {
                badge.set_inner_text(&format!("Member {}", label));
            }
        }
    }

    fn submit(&self) {
        let inner = &self.inner;
        let Some(form) = &inner.form else {
            return;
        };
        if let Err(e) = inner.roster.borrow().validate_for_submit() {
            log::info!("[form] submit blocked: {:?}", e);
            dom::alert(&e.to_string());
            return;
        }
        let button = dom::query::<web::HtmlButtonElement>(form, ".submit-btn");
        let original = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
        let pending = inner.submit_state.borrow_mut().begin(original);
        if let Some(button) = &button {
            button.set_inner_html(pending);
            button.set_disabled(true);
            dom::set_style(button, "opacity", "0.7");
        }
        // Native submission targets the hidden frame; it does not re-fire `submit`.
        if let Err(e) = form.submit() {
            log::error!("[form] submit failed: {:?}", e);
            let restored = inner.submit_state.borrow_mut().fail();
            if let (Some(button), Some(label)) = (&button, restored) {
                button.set_inner_html(&label);
                button.set_disabled(false);
                dom::set_style(button, "opacity", "1");
            }
        }
    }

    fn on_frame_load(&self) {
        let inner = &self.inner;
        let Some(form) = &inner.form else {
            return;
        };
        if !inner.submit_state.borrow_mut().complete() {
            return;
        }
        _ = form.class_list().add_1("submitted");
        let children = form.children();
        for i in 0..children.length() {
            let Some(child) = children.item(i) else {
                continue;
            };
            if child.tag_name() == "IFRAME" || child.id() == SUCCESS_MESSAGE_ID {
                continue;
            }
            if let Some(el) = child.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "display", "none");
            }
        }
        if let Some(msg) = dom::by_id::<web::HtmlElement>(&inner.document, SUCCESS_MESSAGE_ID) {
            dom::set_style(&msg, "display", "block");
            dom::scroll_into_view_centered(&msg);
        }
        log::info!("[form] registration submitted");
    }

    /// Fill every field with sample data, adding members up to the maximum.
    pub fn fill_sample(&self) {
        let inner = &self.inner;
        let Some(form) = &inner.form else {
            return;
        };
        log::info!("[form] filling sample data");

        if let Some(team) = input_named(form, TEAM_NAME_FIELD) {
            team.set_value(SAMPLE_TEAM_NAME);
        }
        let category = format!("select[name=\"{}\"]", CATEGORY_FIELD);
        if let Some(select) = dom::query::<web::HtmlSelectElement>(form, &category) {
            select.set_value(SAMPLE_CATEGORY);
        }
        fill_fields(form, &LEADER_FIELDS, &SAMPLE_LEADER);

        while inner.roster.borrow().can_add() {
            let before = inner.roster.borrow().total();
            self.add_member();
            if inner.roster.borrow().total() == before {
                break;
            }
        }
        let occupied: Vec<usize> = inner.roster.borrow().labels().map(|(s, _)| s).collect();
        for (slot, sample) in occupied.into_iter().zip(SAMPLE_MEMBERS.iter()) {
            fill_fields(form, &crate::roster::MEMBER_SLOTS[slot], sample);
        }

        if let Some(terms) = input_named(form, TERMS_FIELD) {
            terms.set_checked(true);
            dom::scroll_into_view_centered(&terms);
        }
    }
}

fn input_named(form: &web::Element, name: &str) -> Option<web::HtmlInputElement> {
    dom::query(form, &format!("input[name=\"{}\"]", name))
}

fn fill_fields(form: &web::Element, ids: &MemberFieldIds, sample: &SampleMember) {
    for (name, value) in [
        (ids.name, sample.name),
        (ids.email, sample.email),
        (ids.student_id, sample.student_id),
        (ids.phone, sample.phone),
    ] {
        if let Some(input) = input_named(form, name) {
            input.set_value(value);
        }
    }
}

fn build_member_card(
    document: &web::Document,
    added: &AddedMember,
) -> anyhow::Result<web::HtmlElement> {
    let card: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let cl = card.class_list();
    for class in ["card", "form-section", "scroll-animate", "visible"] {
        _ = cl.add_1(class);
    }
    dom::set_style(&card, "margin-top", "1.5rem");
    _ = card.set_attribute("data-slot-index", &added.slot.to_string());
    card.set_inner_html(&member_card_html(added.label, &added.fields));
    Ok(card)
}

fn member_card_html(label: usize, ids: &MemberFieldIds) -> String {
    format!(
        r#"<div class="form-header-badge">
    <span class="badge badge-orange">Member {label}</span>
    <button type="button" class="btn-icon remove-member-btn" aria-label="Remove Member" style="float: right; margin-top: -5px; color: var(--danger);">
        <svg class="icon icon-sm" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </svg>
    </button>
</div>
<div class="form-grid">
    <div class="form-group">
        <label>Full Name <span class="required">*</span></label>
        <div class="input-wrapper"><input type="text" name="{name}" placeholder="Enter full name" required></div>
    </div>
    <div class="form-group">
        <label>Email Address <span class="required">*</span></label>
        <div class="input-wrapper"><input type="email" name="{email}" placeholder="Enter email address" required></div>
    </div>
    <div class="form-group">
        <label>Student ID (Optional)</label>
        <div class="input-wrapper"><input type="text" name="{student_id}" placeholder="Enter student ID"></div>
    </div>
    <div class="form-group">
        <label>Phone Number (Optional)</label>
        <div class="input-wrapper"><input type="tel" name="{phone}" placeholder="Enter phone number"></div>
    </div>
</div>"#,
        label = label,
        name = ids.name,
        email = ids.email,
        student_id = ids.student_id,
        phone = ids.phone,
    )
}
