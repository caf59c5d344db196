//! Static profile record rendered by the page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

/// Icon shown at the start of a link button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    LinkedIn,
    GitHub,
    Code,
    Article,
    Telegram,
}

impl LinkIcon {
    /// Monochrome glyph rendered in the icon slot.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::LinkedIn => "in",
            Self::GitHub => "gh",
            Self::Code => "</>",
            Self::Article => "¶",
            Self::Telegram => "✈",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::LinkedIn => "link-icon link-icon--linkedin",
            Self::GitHub => "link-icon link-icon--github",
            Self::Code => "link-icon link-icon--code",
            Self::Article => "link-icon link-icon--article",
            Self::Telegram => "link-icon link-icon--telegram",
        }
    }
}

/// Button style: filled for the primary link, outlined for the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkVariant {
    Contained,
    #[default]
    Outlined,
}

impl LinkVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Contained => "link-button link-button--contained",
            Self::Outlined => "link-button link-button--outlined",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: LinkIcon,
    pub variant: LinkVariant,
    pub aria_label: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
    pub links: &'static [ProfileLink],
}

impl Profile {
    /// First letter of each word in the name, e.g. `"DT"`.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn avatar_alt(&self) -> String {
        format!("{} profile picture", self.name)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Dmytro Tatarynov",
    bio: "Software Engineer with 5+ years experience",
    avatar: "/assets/avatar.svg",
    links: &[
        ProfileLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/tatarynov-dmytro/",
            icon: LinkIcon::LinkedIn,
            variant: LinkVariant::Contained,
            aria_label: Some("Visit Dmytro Tatarynov LinkedIn profile"),
        },
        ProfileLink {
            label: "GitHub",
            url: "https://github.com/tatarynovdima",
            icon: LinkIcon::GitHub,
            variant: LinkVariant::Outlined,
            aria_label: Some("Visit Dmytro Tatarynov GitHub profile"),
        },
        ProfileLink {
            label: "LeetCode",
            url: "https://leetcode.com/u/tatarynovdima/",
            icon: LinkIcon::Code,
            variant: LinkVariant::Outlined,
            aria_label: Some("Visit Dmytro Tatarynov LeetCode profile"),
        },
        ProfileLink {
            label: "Medium",
            url: "https://medium.com/@dmytro.tatarynov",
            icon: LinkIcon::Article,
            variant: LinkVariant::Outlined,
            aria_label: Some("Visit Dmytro Tatarynov Medium blog"),
        },
        ProfileLink {
            label: "Telegram",
            url: "https://t.me/dmytro_tatarynov",
            icon: LinkIcon::Telegram,
            variant: LinkVariant::Outlined,
            aria_label: Some("Contact Dmytro Tatarynov on Telegram"),
        },
    ],
};
