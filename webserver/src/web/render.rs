//! Server-side HTML rendering
//!
//! Every page is rebuilt from the current cart and catalog on each request.
//! All catalog text is escaped before it reaches the markup.

use shared::{Course, CourseId};

use crate::core::{
    CartStore, Catalog, ExpandedSet, LevelFilter, Receipt, SELECTABLE_LEVELS, filter_courses,
    splice_reorder,
};
use crate::types::{BrowseQuery, CartVariant, CartView};

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Page shell with the navigation header
pub fn layout(title: &str, cart_count: usize, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <header class="nav">
        <div class="nav-inner">
            <div class="nav-brand">
                <h2>Penn Course Cart</h2>
                <span class="muted">Spring 2022 courses</span>
            </div>
            <nav class="nav-links">
                <a href="/">Explore</a>
                <a href="/cart">View cart <span class="badge">{cart_count}</span></a>
            </nav>
        </div>
    </header>
    <main class="container">
{body}
    </main>
    <script src="/static/cart.js" defer></script>
</body>
</html>"#,
        title = escape(title),
    )
}

fn course_form(action: &str, id: &CourseId, return_to: &str, label: &str, class: &str, disabled: bool) -> String {
    format!(
        r#"<form method="post" action="{action}" class="inline-form">
    <input type="hidden" name="id" value="{id}">
    <input type="hidden" name="return_to" value="{return_to}">
    <button type="submit" class="{class}"{disabled}>{label}</button>
</form>"#,
        id = escape(id.as_str()),
        return_to = escape(return_to),
        disabled = if disabled { " disabled" } else { "" },
    )
}

fn level_options(selected: LevelFilter) -> String {
    let mut options = format!(
        r#"<option value="all"{}>All levels</option>"#,
        if selected == LevelFilter::All { " selected" } else { "" }
    );
    for level in SELECTABLE_LEVELS {
        let is_selected = selected == LevelFilter::Level(level);
        options.push_str(&format!(
            r#"<option value="{level}"{}>{level}-level</option>"#,
            if is_selected { " selected" } else { "" }
        ));
    }
    options
}

fn course_details(course: &Course) -> String {
    let mut details = format!(
        r#"<div class="course-details"><p>{}</p>"#,
        escape(&course.description)
    );
    if let Some(prereqs) = &course.prereqs {
        details.push_str(&format!(
            r#"<p class="muted">Prerequisites: {}</p>"#,
            escape(&prereqs.to_string())
        ));
    }
    if !course.cross_listed.is_empty() {
        details.push_str(&format!(
            r#"<p class="muted">Cross-listed: {}</p>"#,
            escape(&course.cross_listed.join(", "))
        ));
    }
    details.push_str("</div>");
    details
}

fn course_card(course: &Course, cart: &CartStore, query: &BrowseQuery, expanded: &ExpandedSet, return_to: &str) -> String {
    let id = course.id();
    let in_cart = cart.contains(&id);
    let is_expanded = expanded.contains(&id);
    let toggle_query = query.with_expanded(&expanded.toggled(&id));

    let action = if in_cart {
        course_form("/cart/remove", &id, return_to, "Remove", "secondary", false)
    } else {
        course_form("/cart/add", &id, return_to, "Add to cart", "", cart.is_full())
    };

    format!(
        r#"<article class="course-card{in_cart_class}" id="{anchor}">
    <div class="course-header">
        <div>
            <h3>{title}</h3>
            <span class="muted">Level {level}</span>
        </div>
        {badge}
    </div>
    <div class="course-actions">
        <a class="link-button" href="/?{toggle}#{anchor}">{toggle_label}</a>
        {action}
    </div>
    {details}
</article>"#,
        in_cart_class = if in_cart { " in-cart" } else { "" },
        anchor = escape(id.as_str()),
        title = escape(&course.display_title()),
        level = course.level(),
        badge = if in_cart { r#"<span class="badge">In cart</span>"# } else { "" },
        toggle = escape(&toggle_query),
        toggle_label = if is_expanded { "Hide details" } else { "Show details" },
        details = if is_expanded { course_details(course) } else { String::new() },
    )
}

/// Catalog browser section
pub fn courses_section(catalog: &Catalog, cart: &CartStore, query: &BrowseQuery) -> String {
    let filter = query.filter();
    let expanded = query.expanded_set();
    let shown = filter_courses(catalog, &filter);
    let current = query.with_expanded(&expanded);
    let return_to = if current.is_empty() { "/".to_string() } else { format!("/?{current}") };

    let mut section = format!(
        r#"<section class="courses">
    <div class="page-header">
        <h1>Explore Courses</h1>
        <p class="muted">Search by title or description, filter by course number, and add up to {max} courses to your cart.</p>
    </div>
    <form class="filters" method="get" action="/">
        <label class="field"><span>Search</span>
            <input type="search" name="search" placeholder="Search by title or description" value="{search}">
        </label>
        <label class="field"><span>Course number</span>
            <input type="text" name="number" inputmode="numeric" placeholder="e.g., 120" value="{number}">
        </label>
        <label class="field"><span>Level</span>
            <select name="level">{levels}</select>
        </label>
        <input type="hidden" name="expanded" value="{expanded}">
        <button type="submit" class="secondary">Apply</button>
    </form>
"#,
        max = cart.max_items(),
        search = escape(&query.search),
        number = escape(&query.number),
        levels = level_options(filter.level()),
        expanded = escape(&expanded.to_param()),
    );

    if cart.is_full() {
        section.push_str(&format!(
            r#"    <div class="alert">You reached the {}-course limit. Remove a course to add more.</div>
"#,
            cart.max_items()
        ));
    }

    if shown.is_empty() {
        section.push_str(
            r#"    <div class="empty-state"><p>No courses match your filters yet.</p></div>
"#,
        );
    } else {
        section.push_str(r#"    <div class="course-grid">"#);
        for course in shown {
            section.push_str(&course_card(course, cart, query, &expanded, &return_to));
        }
        section.push_str("</div>\n");
    }

    section.push_str("</section>");
    section
}

fn reorder_form(order: &[CourseId], label: &str) -> String {
    let joined = order.iter().map(CourseId::as_str).collect::<Vec<_>>().join(",");
    format!(
        r#"<form method="post" action="/cart/reorder" class="inline-form">
    <input type="hidden" name="order" value="{}">
    <button type="submit" class="link-button">{label}</button>
</form>"#,
        escape(&joined)
    )
}

/// Cart panel in either presentation
pub fn cart_section(view: &CartView, variant: CartVariant) -> String {
    let (title, variant_class) = match variant {
        CartVariant::Full => ("Your Cart", "full"),
        CartVariant::Summary => ("Course Cart", "summary"),
    };
    let return_to = match variant {
        CartVariant::Full => "/cart",
        CartVariant::Summary => "/",
    };

    let mut section = format!(
        r#"<section class="cart {variant_class}">
    <div class="cart-header">
        <div>
            <h2>{title}</h2>
            <p class="muted">{count} of {max} courses selected</p>
        </div>
        {view_link}
    </div>
"#,
        count = view.count,
        max = view.max_items,
        view_link = if variant == CartVariant::Summary {
            r#"<a class="button secondary" href="/cart">View cart</a>"#
        } else {
            ""
        },
    );

    if view.is_empty() {
        section.push_str(r#"    <div class="empty-state"><p>Your cart is currently empty.</p>"#);
        if variant == CartVariant::Full {
            section.push_str(r#"<a class="button" href="/">Browse courses</a>"#);
        }
        section.push_str("</div>\n</section>");
        return section;
    }

    let order = view.ids();
    let reorderable = variant == CartVariant::Full && order.len() > 1;
    section.push_str(&format!(
        r#"    <ul class="cart-list"{}>"#,
        if reorderable { r#" data-reorderable="true""# } else { "" }
    ));

    for (position, item) in view.items.iter().enumerate() {
        let mut row = String::new();
        if variant == CartVariant::Full {
            row.push_str(&format!(r#"<span class="rank">#{}</span>"#, item.rank));
        }
        row.push_str(&format!(
            r#"<div><span class="cart-title">{}</span>"#,
            escape(&item.display_title)
        ));
        if variant == CartVariant::Full {
            row.push_str(&format!(r#"<p class="muted">{}</p>"#, escape(&item.description)));
        }
        row.push_str("</div>");

        if reorderable {
            if position > 0 {
                let up = splice_reorder(&order, &item.id, &order[position - 1]);
                row.push_str(&reorder_form(&up, "Move up"));
            }
            if position + 1 < order.len() {
                let down = splice_reorder(&order, &item.id, &order[position + 1]);
                row.push_str(&reorder_form(&down, "Move down"));
            }
        }
        row.push_str(&course_form("/cart/remove", &item.id, return_to, "Remove", "link-button", false));

        section.push_str(&format!(
            r#"<li class="cart-item" data-id="{id}"{draggable}>{row}</li>"#,
            id = escape(item.id.as_str()),
            draggable = if reorderable { r#" draggable="true""# } else { "" },
        ));
    }
    section.push_str("</ul>\n");

    section.push_str(
        r#"    <div class="cart-actions">
        <form method="post" action="/cart/checkout" class="inline-form"><button type="submit" class="button">Checkout</button></form>"#,
    );
    if variant == CartVariant::Full {
        section.push_str(r#"<a class="button secondary" href="/">Continue browsing</a>"#);
    }
    section.push_str("</div>\n</section>");
    section
}

/// `/` : catalog plus summary cart
pub fn browse_page(catalog: &Catalog, cart: &CartStore, view: &CartView, query: &BrowseQuery) -> String {
    let body = format!(
        r#"<div class="layout">
{}
{}
</div>"#,
        courses_section(catalog, cart, query),
        cart_section(view, CartVariant::Summary)
    );
    layout("Explore Courses", view.count, &body)
}

/// `/cart` : full cart view
pub fn cart_page(view: &CartView) -> String {
    layout("Your Cart", view.count, &cart_section(view, CartVariant::Full))
}

/// `/checkout` : receipt for a snapshot
pub fn receipt_page(receipt: &Receipt<'_>, cart_count: usize) -> String {
    let mut body = String::from(
        r#"<div class="page">
    <div class="page-header">
        <h1>Checkout Receipt</h1>
        <p class="muted">Thanks for checking out! Review your selected courses below.</p>
    </div>
"#,
    );

    if receipt.is_empty() {
        body.push_str(
            r#"    <div class="empty-state">
        <p>Your receipt is empty. Try adding courses first.</p>
        <a class="button" href="/">Back to courses</a>
    </div>
"#,
        );
    } else {
        body.push_str(&format!(
            r#"    <div class="receipt">
        <div class="receipt-summary">
            <span class="badge">{} course(s)</span>
            <span class="muted">Receipt ID: {}</span>
        </div>
        <ul class="receipt-list">"#,
            receipt.len(),
            escape(&receipt.receipt_id())
        ));
        for course in receipt.courses() {
            body.push_str(&format!(
                r#"<li><div class="receipt-title">{}</div><p class="muted">{}</p></li>"#,
                escape(&course.display_title()),
                escape(&course.description)
            ));
        }
        body.push_str(
            r#"</ul>
        <a class="button" href="/">Back to courses</a>
    </div>
"#,
        );
    }

    body.push_str("</div>");
    layout("Checkout Receipt", cart_count, &body)
}
