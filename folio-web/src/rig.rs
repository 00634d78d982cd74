use folio::anchor;
use folio::interaction::*;
use gloo_timers::callback::Timeout;
use gloo_timers::future::sleep;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Node, ScrollBehavior,
    ScrollToOptions, Window,
};

/// Wire the layout's behaviors. Listeners live as long as the page.
pub fn start(window: Window, document: Document, settings: RigSettings) -> Result<(), JsValue> {
    let (immediate, deferred) = startup_plan(settings.layout);

    for behavior in immediate {
        start_behavior(behavior, &window, &document, &settings)?;
    }

    wasm_bindgen_futures::spawn_local(async move {
        sleep(DEFERRED_START).await;
        for behavior in deferred {
            if let Err(error) = start_behavior(behavior, &window, &document, &settings) {
                web_sys::console::error_1(&error);
            }
        }
    });

    Ok(())
}

fn start_behavior(
    behavior: Behavior,
    window: &Window,
    document: &Document,
    settings: &RigSettings,
) -> Result<(), JsValue> {
    match behavior {
        Behavior::NavToggle => nav_toggle(document),
        Behavior::SmoothScroll => smooth_scroll(window, document, settings.header_offset),
        Behavior::NavbarShadow => navbar_shadow(window, document),
        Behavior::Ripple => ripple(document),
        // Re-arming owns the observer, so it starts the first reveal itself
        Behavior::ScrollReveal if rearms(settings) => Ok(()),
        Behavior::ScrollReveal => scroll_reveal(document).map(|_| ()),
        Behavior::RevealRearm => reveal_rearm(document),
        Behavior::Typing => typing(document, settings),
        Behavior::LazyImages => lazy_images(document),
    }
}

fn rearms(settings: &RigSettings) -> bool {
    Behavior::for_layout(settings.layout).contains(&Behavior::RevealRearm)
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn set_style(element: &HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in properties {
        // Invalid declarations are ignored by the browser as well
        let _ = style.set_property(property, value);
    }
}

fn nav_toggle(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(anchor::NAV_TOGGLE),
        document.get_element_by_id(anchor::NAV_MENU),
    ) else {
        return Ok(());
    };

    let mut nav = NavToggle::new();
    listen(document, "click", move |event: Event| {
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let on_nav_link = target
            .as_ref()
            .and_then(|node| node.dyn_ref::<Element>())
            .and_then(|element| element.closest(NAV_LINK_SELECTOR).ok().flatten())
            .is_some();

        let click = NavClick::classify(
            toggle.contains(target.as_ref()),
            on_nav_link,
            menu.contains(target.as_ref()),
        );
        let open = nav.on_click(click);
        let _ = menu.class_list().toggle_with_force(NAV_ACTIVE_CLASS, open);
    })
}

fn smooth_scroll(window: &Window, document: &Document, header_offset: f64) -> Result<(), JsValue> {
    for link in query_all::<Element>(document, ANCHOR_LINK_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();

        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let Some(target) = fragment_target(&href)
                .and_then(|id| document.get_element_by_id(id))
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_position(f64::from(target.offset_top()), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

fn navbar_shadow(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(navbar) = document
        .query_selector(".navbar")?
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let scrolled = window.clone();
    let mut shadow = NavbarShadow::new();
    listen(window, "scroll", move |_: Event| {
        let scroll_y = scrolled.scroll_y().unwrap_or_default();
        if let Some(box_shadow) = shadow.on_scroll(scroll_y) {
            set_style(&navbar, &[("box-shadow", box_shadow)]);
        }
    })
}

fn ripple(document: &Document) -> Result<(), JsValue> {
    for button in query_all::<HtmlElement>(document, RIPPLE_BUTTON_SELECTOR)? {
        let document = document.clone();
        let target = button.clone();

        listen(&target, "click", move |event: MouseEvent| {
            let bounds = button.get_bounding_client_rect();
            let span = Ripple::at(
                Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                },
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );

            let Ok(element) = document
                .create_element("span")
                .and_then(|element| element.dyn_into::<HtmlElement>().map_err(JsValue::from))
            else {
                return;
            };
            let style = span.style();
            let properties: Vec<(&str, &str)> = style
                .iter()
                .map(|(property, value)| (*property, value.as_str()))
                .collect();
            set_style(&element, &properties);
            element.set_class_name(RIPPLE_CLASS);

            if button.append_child(&element).is_ok() {
                Timeout::new(RIPPLE_LIFETIME.as_millis() as u32, move || element.remove()).forget();
            }
        })?;
    }
    Ok(())
}

/// Hide every section and reveal each on its first intersection
fn scroll_reveal(document: &Document) -> Result<IntersectionObserver, JsValue> {
    let sections = query_all::<HtmlElement>(document, SECTION_SELECTOR)?;
    let hidden = ScrollReveal::initial_style().properties();
    for section in &sections {
        set_style(section, &hidden);
    }

    let mut reveal = ScrollReveal::new(sections.len());
    let observed = sections.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed
                    .iter()
                    .position(|section| section.is_same_node(Some(target.as_ref())))
                else {
                    continue;
                };
                if let Some(shown) = reveal.on_intersect(index, entry.is_intersecting()) {
                    set_style(&observed[index], &shown.properties());
                }
            }
            if reveal.all_revealed() {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(observer)
}

/// Reveal now, and replay the reveal whenever the tab becomes visible again
fn reveal_rearm(document: &Document) -> Result<(), JsValue> {
    let mut current = scroll_reveal(document)?;
    let page = document.clone();

    listen(document, "visibilitychange", move |_: Event| {
        if page.hidden() {
            return;
        }
        current.disconnect();
        match scroll_reveal(&page) {
            Ok(observer) => current = observer,
            Err(error) => web_sys::console::error_1(&error),
        }
    })
}

fn typing(document: &Document, settings: &RigSettings) -> Result<(), JsValue> {
    let Some(target) = document
        .get_element_by_id(anchor::typing_target(settings.layout))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let text = target.text_content().unwrap_or_default();
    set_style(&target, &[("opacity", "1")]);

    let timing = settings.typing.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let mut sink = ElementText(target);
        play(&mut sink, &text, &timing, sleep).await;
    });
    Ok(())
}

/// Text content of an element, written one character at a time
struct ElementText(HtmlElement);

impl TextSink for ElementText {
    fn clear(&mut self) {
        self.0.set_text_content(Some(""));
    }

    fn push(&mut self, c: char) {
        let mut text = self.0.text_content().unwrap_or_default();
        text.push(c);
        self.0.set_text_content(Some(&text));
    }
}

fn native_lazy_loading() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &"HTMLImageElement".into())
        .and_then(|constructor| js_sys::Reflect::get(&constructor, &"prototype".into()))
        .and_then(|prototype| js_sys::Reflect::has(&prototype, &"loading".into()))
        .unwrap_or(false)
}

fn lazy_images(document: &Document) -> Result<(), JsValue> {
    if !LazyImages::needs_fallback(native_lazy_loading()) {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    let data_src = image.get_attribute("data-src");
                    if let Some(src) = LazyImages::source_on_intersect(true, data_src.as_deref()) {
                        image.set_src(src);
                    }
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in query_all::<Element>(document, LAZY_IMAGE_SELECTOR)? {
        observer.observe(&image);
    }
    Ok(())
}
