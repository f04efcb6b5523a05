//! 代表メニューと数値セットの組み立て

use crate::sections::{parse_sections, NumericSet};
use crate::types::MenuItem;

/// 代表メニューと数値セットを出現順で対応付ける
///
/// - 数値セットが足りないメニューは 0 埋め
/// - 余った数値セットは捨てる
pub fn assemble_items(names: &[String], numbers: &[NumericSet]) -> Vec<MenuItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let set = numbers.get(i).copied().unwrap_or_default();
            MenuItem {
                name: name.clone(),
                price: set.price,
                cost: set.cost,
                eaters: set.eaters,
            }
        })
        .collect()
}

/// テキスト全体からメニュー一覧を作る（セクション出現順に連結）
pub fn parse_menu_items(raw_text: &str) -> Vec<MenuItem> {
    parse_sections(raw_text)
        .iter()
        .flat_map(|section| assemble_items(&section.names, &section.numbers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assemble_zero_fills_missing_numbers() {
        let numbers = [NumericSet { price: 5000, cost: 3000, eaters: 120 }];
        let items = assemble_items(&names(&["된장찌개", "김치찌개"]), &numbers);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 5000);
        assert_eq!(items[1].name, "김치찌개");
        assert_eq!((items[1].price, items[1].cost, items[1].eaters), (0, 0, 0));
    }

    #[test]
    fn test_assemble_discards_extra_numbers() {
        let numbers = [
            NumericSet { price: 1, cost: 1, eaters: 1 },
            NumericSet { price: 2, cost: 2, eaters: 2 },
        ];
        let items = assemble_items(&names(&["죽"]), &numbers);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 1);
    }

    #[test]
    fn test_parse_menu_items_across_sections() {
        let text = "\
조식
■ 된장찌개
칼로리 650
식수 120
원가 3000
식단가 5000
비율 60%
중식
■ 제육볶음
식단가 6000
비율 50%

■ 얼큰순대국밥
매점
■ 김밥
식단가 3000
비율 10%
";
        let items = parse_menu_items(text);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], MenuItem { name: "된장찌개".into(), price: 5000, cost: 3000, eaters: 120 });
        assert_eq!(items[1].name, "제육볶음");
        assert_eq!(items[1].price, 6000);
        assert_eq!(items[2], MenuItem { name: "얼큰순대국밥".into(), ..Default::default() });
    }

    #[test]
    fn test_snack_shop_contributes_nothing() {
        let text = "매점\n■ 김밥\n식수 10\n원가 1000\n식단가 3000\n비율 33%";
        assert!(parse_menu_items(text).is_empty());
    }

    #[test]
    fn test_green_salad_not_zero_filled() {
        let text = "중식\n■ 그린샐러드(A)\n식단가 2000\n비율 10%";
        assert!(parse_menu_items(text).is_empty());
    }
}
