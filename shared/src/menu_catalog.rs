use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::SEGMENT_COLORS;

/// A named group of menu items that share one wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub emoji: String,
    pub items: Vec<String>,
}

impl MenuCategory {
    pub fn new(name: &str, emoji: &str, items: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            items,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.items.len()
    }
}

fn category(name: &str, emoji: &str, items: &[&str]) -> MenuCategory {
    MenuCategory::new(name, emoji, items.iter().map(|item| item.to_string()).collect())
}

static DEFAULT_CATALOG: Lazy<Vec<MenuCategory>> = Lazy::new(|| {
    vec![
        category("한식", "🍚", &["김치찌개", "된장찌개", "비빔밥", "불고기", "삼겹살", "갈비탕", "냉면", "제육볶음"]),
        category("중식", "🥟", &["짜장면", "짬뽕", "탕수육", "마파두부", "볶음밥", "깐풍기", "양장피", "마라탕"]),
        category("일식", "🍣", &["초밥", "라멘", "우동", "돈카츠", "카레", "사시미", "오코노미야끼", "소바"]),
        category("양식", "🍝", &["파스타", "스테이크", "리조또", "피자", "햄버거", "오믈렛", "그라탕", "샐러드"]),
        category("분식", "🍜", &["떡볶이", "순대", "김밥", "라볶이", "튀김", "어묵", "쫄면", "비빔국수"]),
        category("카페/디저트", "☕", &["아메리카노", "카페라떼", "케이크", "마카롱", "와플", "빙수", "스무디", "크로플"]),
        category("치킨", "🍗", &["후라이드", "양념치킨", "간장치킨", "마늘치킨", "허니버터", "불닭", "반반치킨", "순살치킨"]),
        category("야식", "🌙", &["족발", "보쌈", "곱창", "회", "닭발", "떡볶이", "라면", "치즈볼"]),
    ]
});

/// The built-in categories offered by the roulette page.
pub fn default_catalog() -> &'static [MenuCategory] {
    &DEFAULT_CATALOG
}

/// Fill colour for a segment; the palette repeats past eight items.
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().all(|c| c.segment_count() == 8));
        assert_eq!(catalog[0].name, "한식");
        assert_eq!(catalog[7].items[5], "떡볶이");
    }

    #[test]
    fn test_segment_color_cycles() {
        assert_eq!(segment_color(0), "#F87171");
        assert_eq!(segment_color(8), segment_color(0));
        assert_eq!(segment_color(11), "#34D399");
    }
}
