//! In-page JavaScript, built as strings and evaluated over CDP.
//!
//! Everything jpd does inside the host page is generated here: the
//! readiness promise, the trigger control, and the `window.open`
//! interception critical section.

/// Marker class that prevents duplicate injection of the trigger control.
pub const TRIGGER_MARKER_CLASS: &str = "jpd-download-patch-button";

/// Idle label of the trigger control.
pub const IDLE_LABEL: &str = ".patch \u{2913}";

/// Busy label shown while an activation is in flight.
pub const BUSY_LABEL: &str = "Downloading...";

/// Name of the CDP binding the trigger control reports activations through.
pub const ACTIVATION_BINDING: &str = "__jpdActivation";

/// Selector for the host container the trigger control is injected into.
pub const CONTAINER_SELECTOR: &str = ".panel-buttons";

/// Selector for the branch label region of the session page.
pub const BRANCH_SELECTOR: &str = ".code-header-branch-name-container";

/// Candidate reveal-PR controls, tried in this order. The ordering is a
/// contract with the host page; do not reorder.
pub const REVEAL_CONTROL_SELECTORS: [&str; 3] = [
    "button.view-button",
    "swebot-publish-button button",
    ".publish-button button",
];

/// Quotes `s` as a double-quoted JavaScript string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Promise that settles once an element matching `selector` exists.
///
/// Immediate hit resolves synchronously with no subscription; otherwise one
/// MutationObserver on `document.body` (childList + subtree) re-queries on
/// every notification and disconnects on the first match. No timeout: if
/// the element never appears the promise stays pending for the page's
/// lifetime.
pub fn await_element_script(selector: &str) -> String {
    let sel = js_string(selector);
    format!(
        r#"new Promise((resolve) => {{
    if (document.querySelector({sel})) {{
        resolve(true);
        return;
    }}
    const observer = new MutationObserver(() => {{
        if (document.querySelector({sel})) {{
            observer.disconnect();
            resolve(true);
        }}
    }});
    observer.observe(document.body, {{ childList: true, subtree: true }});
}})"#
    )
}

/// Wraps `operation` in a scoped override of `window.open`.
///
/// Declares `captured` in the enclosing scope, substitutes a stub that
/// records the first argument and returns an inert stand-in, runs
/// `operation`, and restores the original primitive in a `finally`, so
/// restoration holds even when the operation throws. A URL recorded before
/// a throw still counts; the throw itself is swallowed.
pub fn with_window_open_captured(operation: &str) -> String {
    format!(
        r#"const originalOpen = window.open;
let captured = null;
window.open = (url) => {{
    captured = url;
    return {{ focus: () => {{}}, close: () => {{}} }};
}};
try {{
    {operation}
}} catch (err) {{
}} finally {{
    window.open = originalOpen;
}}"#
    )
}

/// Expression producing one activation's payload: the captured PR URL or a
/// failure code, plus the branch label read fresh from the page.
pub fn activation_payload_script() -> String {
    let find = REVEAL_CONTROL_SELECTORS
        .iter()
        .map(|s| format!("document.querySelector({})", js_string(s)))
        .collect::<Vec<_>>()
        .join(" || ");
    let branch_sel = js_string(BRANCH_SELECTOR);
    let critical = with_window_open_captured("control.click();");
    format!(
        r#"(() => {{
    const payload = {{}};
    const branchEl = document.querySelector({branch_sel});
    payload.branch = branchEl ? branchEl.textContent.trim() : null;
    const control = {find};
    if (!control) {{
        payload.error = "control-not-found";
        return payload;
    }}
    {critical}
    if (captured) {{
        payload.url = String(captured);
    }} else {{
        payload.error = "url-not-captured";
    }}
    return payload;
}})()"#
    )
}

/// Injects the trigger control as the container's first child.
///
/// Returns `false` when the container is missing, `true` otherwise. The
/// marker class makes repeated evaluation a no-op. The click handler sets
/// the busy state, runs the interception synchronously, and ships the
/// payload through the activation binding.
pub fn inject_trigger_script() -> String {
    let container = js_string(CONTAINER_SELECTOR);
    let marker = js_string(TRIGGER_MARKER_CLASS);
    let idle = js_string(IDLE_LABEL);
    let busy = js_string(BUSY_LABEL);
    let payload = activation_payload_script();
    let binding = ACTIVATION_BINDING;
    format!(
        r#"(() => {{
    const container = document.querySelector({container});
    if (!container) {{
        return false;
    }}
    if (document.querySelector("." + {marker})) {{
        return true;
    }}
    const template = container.querySelector("button");
    let trigger;
    if (template) {{
        trigger = template.cloneNode(true);
    }} else {{
        trigger = document.createElement("button");
    }}
    trigger.textContent = {idle};
    trigger.classList.add({marker});
    trigger.style.marginRight = "8px";
    trigger.style.marginLeft = "0px";
    trigger.style.cursor = "pointer";
    if (container.firstChild) {{
        container.insertBefore(trigger, container.firstChild);
    }} else {{
        container.appendChild(trigger);
    }}
    trigger.addEventListener("click", (event) => {{
        event.preventDefault();
        event.stopPropagation();
        if (trigger.disabled) {{
            return;
        }}
        trigger.textContent = {busy};
        trigger.disabled = true;
        const payload = {payload};
        window.{binding}(JSON.stringify(payload));
    }});
    return true;
}})()"#
    )
}

/// Returns the trigger control to idle, the final transition of every
/// activation. No-op when no trigger exists (one-shot mode).
pub fn reset_trigger_script() -> String {
    let marker = js_string(TRIGGER_MARKER_CLASS);
    let idle = js_string(IDLE_LABEL);
    format!(
        r#"(() => {{
    const trigger = document.querySelector("." + {marker});
    if (trigger) {{
        trigger.textContent = {idle};
        trigger.disabled = false;
    }}
}})()"#
    )
}

/// Raises a blocking alert in the page.
pub fn alert_script(message: &str) -> String {
    format!("window.alert({});", js_string(message))
}
