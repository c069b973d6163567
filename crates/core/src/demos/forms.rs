/// Object-shaped local state: three fields edited independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub age: u32,
}

const PLACEHOLDER: &str = "---";

impl ProfileForm {
    /// Store the age typed into a number field; anything unparsable becomes 0.
    pub fn set_age_input(&mut self, raw: &str) {
        self.age = parse_age(raw);
    }

    #[must_use]
    pub fn name_preview(&self) -> &str {
        if self.name.is_empty() { PLACEHOLDER } else { &self.name }
    }

    #[must_use]
    pub fn email_preview(&self) -> &str {
        if self.email.is_empty() { PLACEHOLDER } else { &self.email }
    }

    #[must_use]
    pub fn age_preview(&self) -> String {
        if self.age == 0 {
            PLACEHOLDER.to_string()
        } else {
            self.age.to_string()
        }
    }
}

/// Leading integer of `raw`, or 0.
///
/// Mirrors a browser number input: `"42abc"` reads as 42, `"abc"` as 0 and
/// negative ages clamp to 0.
#[must_use]
pub fn parse_age(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}

/// Array-shaped local state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append unless blank. Returns whether the item was added.
    pub fn add(&mut self, item: &str) -> bool {
        if item.trim().is_empty() {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn remove_at(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }
}
