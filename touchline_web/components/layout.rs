use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutData {
    pub club_name: String,
    pub nav_active: String,
    pub notice: Option<Notice>,
}

/// Navbar, notice banner and footer around the page body.
#[component]
pub fn PageLayout(data: LayoutData, children: Element) -> Element {
    rsx! {
        Navbar { club_name: data.club_name.clone(), active: data.nav_active.clone() }
        main { class: "flex-grow pt-20",
            if let Some(notice) = &data.notice {
                NoticeBanner { notice: notice.clone() }
            }
            {children}
        }
        Footer { club_name: data.club_name.clone() }
    }
}

const NAV_LINKS: [(&str, &str, &str); 8] = [
    ("facilities", "/facilities", "Facilities"),
    ("history", "/history", "Club History"),
    ("team", "/team", "Team"),
    ("statistics", "/statistics", "Statistics"),
    ("fixtures", "/fixtures", "Fixtures"),
    ("results", "/results", "Results"),
    ("standings", "/standings", "League Table"),
    ("gallery", "/gallery", "Gallery"),
];

#[component]
fn Navbar(club_name: String, active: String) -> Element {
    let link_class = |page: &str| -> &'static str {
        if active == page {
            "px-3 py-2 rounded-md text-gray-900 bg-gray-100 font-semibold"
        } else {
            "px-3 py-2 rounded-md text-gray-700 hover:bg-gray-100 transition-colors"
        }
    };

    rsx! {
        header { class: "fixed top-0 left-0 right-0 z-50 bg-white shadow-md",
            div { class: "container mx-auto px-4 h-20 flex items-center justify-between",
                a { href: "/", class: "text-2xl font-bold text-gray-900", "{club_name}" }
                nav { class: "hidden lg:flex items-center space-x-1 text-sm",
                    for (page, href, label) in NAV_LINKS {
                        a { key: "{page}", href: "{href}", class: link_class(page), "{label}" }
                    }
                }
                // Mobile menu
                details { class: "lg:hidden relative",
                    summary { class: "cursor-pointer list-none p-2 rounded-md bg-gray-100", "☰" }
                    div { class: "absolute right-0 mt-2 w-48 bg-white shadow-xl rounded-md flex flex-col p-2",
                        for (page, href, label) in NAV_LINKS {
                            a { key: "m-{page}", href: "{href}", class: link_class(page), "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let class = match notice.kind {
        NoticeKind::Success => "bg-green-50 border-green-400 text-green-800",
        NoticeKind::Error => "bg-red-50 border-red-400 text-red-800",
    };

    rsx! {
        div { class: "container mx-auto px-4 mt-6",
            div { role: "status", class: "notice border-l-4 p-4 rounded {class}", "{notice.text}" }
        }
    }
}

#[component]
fn Footer(club_name: String) -> Element {
    rsx! {
        footer { class: "bg-gray-900 text-white mt-auto",
            div { class: "container mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8",
                div {
                    h3 { class: "text-xl font-bold mb-4", "{club_name}" }
                    p { class: "text-gray-400", "Your local football club since 1900" }
                }
                div {
                    h3 { class: "text-lg font-semibold mb-4", "Quick Links" }
                    ul { class: "space-y-2",
                        li { a { href: "/fixtures", class: "text-gray-400 hover:text-white", "Fixtures" } }
                        li { a { href: "/results", class: "text-gray-400 hover:text-white", "Results" } }
                        li { a { href: "/standings", class: "text-gray-400 hover:text-white", "League Table" } }
                        li { a { href: "/gallery", class: "text-gray-400 hover:text-white", "Gallery" } }
                    }
                }
                div {
                    h3 { class: "text-lg font-semibold mb-4", "Club" }
                    ul { class: "space-y-2",
                        li { a { href: "/history", class: "text-gray-400 hover:text-white", "History" } }
                        li { a { href: "/facilities", class: "text-gray-400 hover:text-white", "Facilities" } }
                        li { a { href: "/team", class: "text-gray-400 hover:text-white", "Team" } }
                        li { a { href: "/statistics", class: "text-gray-400 hover:text-white", "Statistics" } }
                    }
                }
            }
        }
    }
}

/// Generate the complete HTML document around a rendered body.
pub fn wrap_in_html(title: &str, body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="stylesheet" href="/assets/index.css">
</head>
<body class="flex flex-col min-h-screen bg-white">
{}
</body>
</html>"#,
        escape_html(title),
        body_content
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_html_escapes_title() {
        let html = wrap_in_html("Team <Roster>", "<main></main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Team &lt;Roster&gt;</title>"));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_layout_renders_notice_and_active_link() {
        let data = LayoutData {
            club_name: "FC United".to_string(),
            nav_active: "team".to_string(),
            notice: Some(Notice::success("Player added successfully")),
        };
        let html = dioxus_ssr::render_element(rsx! {
            PageLayout { data: data, p { "body" } }
        });

        assert!(html.contains("FC United"));
        assert!(html.contains("Player added successfully"));
        assert!(html.contains("font-semibold"));
        assert!(html.contains("body"));
    }
}
