use crate::models::AccountRecord;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Banner printed before a run starts.
pub fn render_header(username: &str, location: &str) -> String {
    let rule = rule();
    format!(
        "\n{rule}\n🎵 SoundCloud Location Filter\n{rule}\nUser: {username}\nLocation: {location}\n{rule}\n"
    )
}

/// Renders the matched users as a numbered list.
pub fn render_results(users: &[&AccountRecord], location: &str) -> String {
    if users.is_empty() {
        return format!("\n❌ No users found in '{}'\n", location);
    }

    let rule = rule();
    let mut out = format!(
        "\n{rule}\n✅ Found {} users in '{}':\n{rule}\n\n",
        users.len(),
        location
    );

    for (i, user) in users.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, user.permalink().unwrap_or("N/A")));
        if let Some(name) = user.full_name().filter(|n| !n.is_empty()) {
            out.push_str(&format!("   Name: {}\n", name));
        }
        out.push_str(&format!(
            "   Location: {}\n",
            user.location().as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!(
            "   Followers: {}\n",
            group_thousands(user.followers_count().unwrap_or(0))
        ));
        out.push_str(&format!("   URL: {}\n\n", user.permalink_url().unwrap_or("N/A")));
    }

    out
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
