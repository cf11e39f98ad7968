//! Item Categories
//!
//! Fixed label -> id table understood by the server.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Id sent when a label is not in the table (기타물품)
pub const DEFAULT_CATEGORY_ID: u32 = 64;

/// Label used by the detail view when the server omits a category name
pub const DEFAULT_CATEGORY_LABEL: &str = "기타";

/// All categories in server id order
pub const CATEGORIES: &[(&str, u32)] = &[
    // 가방
    ("여성용가방", 1), ("남성용가방", 2), ("기타가방", 3),
    // 귀금속
    ("반지", 4), ("목걸이", 5), ("귀걸이", 6), ("시계", 7), ("기타(귀금속)", 8),
    // 도서용품
    ("학습서적", 9), ("소설", 10), ("컴퓨터서적", 11), ("만화책", 12), ("기타서적", 13),
    // 서류
    ("서류", 14), ("기타(서류)", 15),
    ("쇼핑백", 16),
    ("스포츠용품", 17),
    // 악기
    ("건반악기", 18), ("타악기", 19), ("관악기", 20), ("현악기", 21), ("기타악기", 22),
    // 유가증권
    ("어음", 23), ("상품권", 24), ("채권", 25), ("기타(유가증권)", 26),
    // 의류
    ("여성의류", 27), ("남성의류", 28), ("아기의류", 29), ("모자", 30), ("신발", 31), ("기타의류", 32),
    // 자동차
    ("자동차열쇠", 33), ("네비게이션", 34), ("자동차번호판", 35), ("임시번호판", 36), ("기타(자동차용품)", 37),
    // 전자기기
    ("태블릿", 38), ("스마트워치", 39), ("무선이어폰", 40), ("카메라", 41), ("기타(전자기기)", 42),
    // 지갑
    ("여성용지갑", 43), ("남성용지갑", 44), ("기타지갑", 45),
    // 증명서
    ("신분증", 46), ("면허증", 47), ("여권", 48), ("기타(증명서)", 49),
    // 컴퓨터
    ("삼성노트북", 50), ("LG노트북", 51), ("애플노트북", 52), ("기타(컴퓨터)", 53),
    // 카드
    ("신용(체크)카드", 54), ("일반카드", 55), ("교통카드", 56), ("기타카드", 57),
    ("현금", 58),
    // 휴대폰
    ("삼성휴대폰", 59), ("LG휴대폰", 60), ("아이폰", 61), ("기타휴대폰", 62), ("기타통신기기", 63),
    // 기타 / 유류품 / 무주물
    ("기타물품", 64), ("무안공항유류품", 65), ("유류품", 66), ("무주물", 67),
];

static CATEGORY_IDS: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| CATEGORIES.iter().copied().collect());

/// Numeric id for a category label, falling back to [`DEFAULT_CATEGORY_ID`]
pub fn category_id(label: &str) -> u32 {
    CATEGORY_IDS
        .get(label)
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_is_complete_and_ordered() {
        assert_eq!(CATEGORIES.len(), 67);
        for (index, (_, id)) in CATEGORIES.iter().enumerate() {
            assert_eq!(*id as usize, index + 1);
        }
        assert_eq!(CATEGORY_IDS.len(), 67, "labels must be unique");
    }

    #[test]
    fn test_every_label_maps_to_its_id() {
        for (label, id) in CATEGORIES {
            assert_eq!(category_id(label), *id, "{}", label);
        }
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(category_id("여성용가방"), 1);
        assert_eq!(category_id("신용(체크)카드"), 54);
        assert_eq!(category_id("아이폰"), 61);
        assert_eq!(category_id("무주물"), 67);
    }

    #[test]
    fn test_unknown_label_is_miscellaneous() {
        assert_eq!(category_id(""), DEFAULT_CATEGORY_ID);
        assert_eq!(category_id("우산"), 64);
        assert_eq!(category_id("아이폰 "), 64);
    }
}
