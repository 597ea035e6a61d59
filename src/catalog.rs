//! The fixed list of images the website needs, grouped by page section.

use clap::ValueEnum;

use crate::ports::ImageSpec;

/// Website section an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Full-width hero banner.
    Hero,
    /// Service card thumbnails.
    Services,
    /// Before/after treatment pairs.
    Results,
    /// Medical director portrait.
    Team,
    /// Testimonial avatars.
    Testimonials,
    /// Instagram post tiles.
    Social,
    /// Certification badges.
    Badges,
}

impl Section {
    /// All sections in generation order.
    #[cfg(test)]
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Services,
        Self::Results,
        Self::Team,
        Self::Testimonials,
        Self::Social,
        Self::Badges,
    ];

    /// Progress heading printed before the section's first image.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Hero => "Creating hero image...",
            Self::Services => "Creating service images...",
            Self::Results => "Creating before/after images...",
            Self::Team => "Creating team photo...",
            Self::Testimonials => "Creating testimonial photos...",
            Self::Social => "Creating Instagram posts...",
            Self::Badges => "Creating badge placeholders...",
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Section the image belongs to.
    pub section: Section,
    /// What to draw and where.
    pub spec: ImageSpec,
}

const SERVICES: &[(&str, &str)] = &[
    ("Botox", "botox"),
    ("Dermal Fillers", "fillers"),
    ("Laser Treatment", "laser"),
    ("Body Contouring", "body-contouring"),
    ("Chemical Peel", "chemical-peel"),
    ("Microneedling", "microneedling"),
    ("HydraFacial", "hydrafacial"),
    ("Skin Tightening", "skin-tightening"),
];

const TREATMENTS: &[&str] = &["botox", "filler", "laser", "body", "peel", "microneedling"];

const CLIENTS: &[&str] =
    &["Jennifer L.", "Michael R.", "Sarah K.", "Amanda T.", "Lisa M.", "David P."];

const SOCIAL_POSTS: u32 = 6;

const BADGES: &[&str] = &[
    "medical-board",
    "amspa-member",
    "safety-certified",
    "allergan-certified",
    "galderma-expert",
    "amspa-gold",
    "secure-ssl",
    "hipaa-compliant",
];

/// Every image, in generation order.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    let mut push = |section, spec| entries.push(CatalogEntry { section, spec });

    push(
        Section::Hero,
        ImageSpec::new(1920, 1080, "Luxury Spa Interior", "images/hero-background.jpg", "primary"),
    );

    for &(name, slug) in SERVICES {
        push(
            Section::Services,
            ImageSpec::new(800, 600, name, format!("images/services/{slug}.jpg"), "secondary"),
        );
    }

    for &treatment in TREATMENTS {
        let title = title_case(treatment);
        for (stage, color) in [("Before", "accent"), ("After", "primary")] {
            push(
                Section::Results,
                ImageSpec::new(
                    600,
                    800,
                    format!("{title} - {stage}"),
                    format!("images/results/{treatment}-{}.jpg", stage.to_ascii_lowercase()),
                    color,
                ),
            );
        }
    }

    push(
        Section::Team,
        ImageSpec::new(
            800,
            800,
            "Dr. Sarah Mitchell",
            "images/about/medical-director.jpg",
            "primary",
        ),
    );

    for (i, &name) in CLIENTS.iter().enumerate() {
        push(
            Section::Testimonials,
            ImageSpec::new(
                300,
                300,
                name,
                format!("images/testimonials/client-{}.jpg", i + 1),
                "secondary",
            ),
        );
    }

    for n in 1..=SOCIAL_POSTS {
        push(
            Section::Social,
            ImageSpec::new(
                1080,
                1080,
                format!("Instagram Post {n}"),
                format!("images/instagram/post-{n}.jpg"),
                "accent",
            ),
        );
    }

    for &badge in BADGES {
        push(
            Section::Badges,
            ImageSpec::new(
                200,
                200,
                title_case(&badge.replace('-', " ")),
                format!("images/badges/{badge}.png"),
                "primary",
            ),
        );
    }

    entries
}

/// Catalog entries, optionally restricted to one section.
#[must_use]
pub fn select(section: Option<Section>) -> Vec<CatalogEntry> {
    catalog().into_iter().filter(|e| section.map_or(true, |s| e.section == s)).collect()
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use super::*;

    fn count(section: Section) -> usize {
        catalog().iter().filter(|e| e.section == section).count()
    }

    #[test]
    fn section_counts() {
        assert_eq!(count(Section::Hero), 1);
        assert_eq!(count(Section::Services), 8);
        assert_eq!(count(Section::Results), 12);
        assert_eq!(count(Section::Team), 1);
        assert_eq!(count(Section::Testimonials), 6);
        assert_eq!(count(Section::Social), 6);
        assert_eq!(count(Section::Badges), 8);
        assert_eq!(catalog().len(), 42);
    }

    #[test]
    fn paths_are_unique() {
        let entries = catalog();
        let paths: HashSet<&PathBuf> = entries.iter().map(|e| &e.spec.path).collect();
        assert_eq!(paths.len(), entries.len());
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let mut seen: Vec<Section> = Vec::new();
        for entry in catalog() {
            if seen.last() != Some(&entry.section) {
                assert!(!seen.contains(&entry.section), "{:?} appears twice", entry.section);
                seen.push(entry.section);
            }
        }
        assert_eq!(seen, Section::ALL);
    }

    #[test]
    fn colors_exist_in_default_palette() {
        let palette = crate::palette::Palette::default();
        for entry in catalog() {
            assert!(palette.resolve(&entry.spec.color).is_ok(), "{}", entry.spec.color);
        }
    }

    #[test]
    fn results_pairs() {
        let results: Vec<_> = select(Some(Section::Results));
        assert_eq!(results[0].spec.label, "Botox - Before");
        assert_eq!(results[0].spec.path, PathBuf::from("images/results/botox-before.jpg"));
        assert_eq!(results[0].spec.color, "accent");
        assert_eq!(results[1].spec.label, "Botox - After");
        assert_eq!(results[1].spec.path, PathBuf::from("images/results/botox-after.jpg"));
        assert_eq!(results[1].spec.color, "primary");
        assert!(results.iter().all(|e| (e.spec.width, e.spec.height) == (600, 800)));
    }

    #[test]
    fn badges_are_png_with_title_labels() {
        let badges = select(Some(Section::Badges));
        assert_eq!(badges[0].spec.label, "Medical Board");
        assert_eq!(badges[6].spec.label, "Secure Ssl");
        assert!(badges.iter().all(|e| e.spec.path.extension().unwrap() == "png"));
    }

    #[test]
    fn testimonials_numbered_from_one() {
        let t = select(Some(Section::Testimonials));
        assert_eq!(t[0].spec.label, "Jennifer L.");
        assert_eq!(t[0].spec.path, PathBuf::from("images/testimonials/client-1.jpg"));
        assert_eq!(t[5].spec.path, PathBuf::from("images/testimonials/client-6.jpg"));
    }

    #[test]
    fn select_all() {
        assert_eq!(select(None).len(), catalog().len());
    }

    #[test]
    fn title_case_rules() {
        assert_eq!(title_case("botox"), "Botox");
        assert_eq!(title_case("medical board"), "Medical Board");
        assert_eq!(title_case("hIPAA compliant"), "Hipaa Compliant");
        assert_eq!(title_case("o'neil 2x"), "O'Neil 2X");
        assert_eq!(title_case(""), "");
    }
}
