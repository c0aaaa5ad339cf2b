//! Per-conference scraping recipes.
//!
//! Each supported proceedings site gets a hand-written [`Recipe`]: which
//! elements on the listing page matter and, where the listing only links to
//! per-paper pages, how to find the PDF on those. Recipes are looked up in a
//! fixed table keyed by conference name and a [`YearRule`], since sites are
//! redesigned from one year to the next.

use scraper::ElementRef;

use crate::matcher::{self, Matcher};
use crate::scholar;

fn usenix_paper_page(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::class_contains(matcher::grandparent(el), "node-paper")
}

fn usenix_file_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::class_is(matcher::parent(el), "file")
}

fn paper_text_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::text(el) == "Paper"
}

fn h3_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::parent(el).is_some_and(|p| matcher::is_tag(&p, "h3"))
}

fn pdf_text_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::text(el) == "[PDF]"
}

fn list_group_bold_title(el: &ElementRef<'_>) -> bool {
    matcher::is_tag(el, "b") && matcher::class_is(matcher::parent(el), "list-group-item")
}

fn list_group_link_title(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && matcher::class_is(matcher::grandparent(el), "list-group-item")
}

pub const USENIX_PAPER_PAGE: Matcher = Matcher::new("USENIX paper page link", usenix_paper_page);
pub const USENIX_FILE: Matcher = Matcher::new("USENIX file link", usenix_file_link);
pub const PAPER_LINK: Matcher = Matcher::new("\"Paper\" link", paper_text_link);
pub const H3_LINK: Matcher = Matcher::new("h3 link", h3_link);
pub const PDF_LINK: Matcher = Matcher::new("\"[PDF]\" link", pdf_text_link);
pub const LIST_GROUP_TITLE: Matcher = Matcher::new("list-group bold title", list_group_bold_title);
pub const LIST_GROUP_LINK_TITLE: Matcher = Matcher::new("list-group linked title", list_group_link_title);

/// How papers are reached from a listing page.
#[derive(Debug, Clone, Copy)]
pub enum Recipe {
    /// The listing links straight to the PDFs.
    DirectLinks { links: Matcher },
    /// The listing links to one page per paper, which holds the PDF link.
    PaperPages { pages: Matcher, pdf: Matcher },
    /// The listing only names the papers; each title is searched for and the
    /// PDF is taken from the search results.
    TitleSearch { titles: Matcher, pdf: Matcher },
}

/// Which years a recipe covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRule {
    Any,
    OneOf(&'static [i32]),
    /// Inclusive range.
    Between(i32, i32),
    /// Every year up to and including this one.
    UpTo(i32),
}

impl YearRule {
    pub fn accepts(&self, year: i32) -> bool {
        match *self {
            YearRule::Any => true,
            YearRule::OneOf(years) => years.contains(&year),
            YearRule::Between(first, last) => (first..=last).contains(&year),
            YearRule::UpTo(last) => year <= last,
        }
    }
}

struct SiteRule {
    name: &'static str,
    years: YearRule,
    recipe: Recipe,
}

const SITE_RULES: &[SiteRule] = &[
    SiteRule {
        name: "USENIX",
        years: YearRule::Any,
        recipe: Recipe::PaperPages { pages: USENIX_PAPER_PAGE, pdf: USENIX_FILE },
    },
    SiteRule { name: "NDSS", years: YearRule::OneOf(&[2018]), recipe: Recipe::DirectLinks { links: PAPER_LINK } },
    SiteRule {
        name: "NDSS",
        years: YearRule::OneOf(&[2014, 2015, 2017]),
        recipe: Recipe::PaperPages { pages: H3_LINK, pdf: PAPER_LINK },
    },
    SiteRule { name: "NDSS", years: YearRule::OneOf(&[2016]), recipe: Recipe::DirectLinks { links: H3_LINK } },
    SiteRule {
        name: "Oakland",
        years: YearRule::Between(2015, 2018),
        recipe: Recipe::TitleSearch { titles: LIST_GROUP_TITLE, pdf: scholar::PDF_RESULT },
    },
    SiteRule {
        name: "Oakland",
        years: YearRule::UpTo(2014),
        recipe: Recipe::TitleSearch { titles: LIST_GROUP_LINK_TITLE, pdf: scholar::PDF_RESULT },
    },
    SiteRule { name: "CCS", years: YearRule::OneOf(&[2017]), recipe: Recipe::DirectLinks { links: PDF_LINK } },
];

/// Why no recipe applies to a conference entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRecipe {
    UnknownConference,
    UnsupportedYear,
}

/// Looks up the recipe for a conference name and year.
///
/// # Example
///
/// ```rust
/// use paperchase_core::sites::{NoRecipe, Recipe, recipe_for};
///
/// assert!(matches!(recipe_for("CCS", 2017), Ok(Recipe::DirectLinks { .. })));
/// assert_eq!(recipe_for("CCS", 2016).unwrap_err(), NoRecipe::UnsupportedYear);
/// ```
pub fn recipe_for(name: &str, year: i32) -> Result<Recipe, NoRecipe> {
    let mut known = false;
    for rule in SITE_RULES.iter().filter(|rule| rule.name == name) {
        known = true;
        if rule.years.accepts(year) {
            return Ok(rule.recipe);
        }
    }

    Err(if known { NoRecipe::UnsupportedYear } else { NoRecipe::UnknownConference })
}

/// Names of all conferences with at least one recipe.
pub fn supported_conferences() -> Vec<&'static str> {
    let mut names: Vec<_> = SITE_RULES.iter().map(|rule| rule.name).collect();
    names.dedup();
    names
}
