//! 分页 - 业务能力层
//!
//! 纯函数，不读取任何请求状态

use crate::error::{AppError, AppResult};

/// 每页题目数
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 取第 `page` 页（从 1 开始），越界时返回空列表
pub fn paginate<T: Clone>(page: usize, page_size: usize, items: &[T]) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    if start >= end {
        return Vec::new();
    }
    items[start..end].to_vec()
}

/// 解析 `page` 查询参数
///
/// 缺失或不是整数时取 1，小于 1 视为请求错误
pub fn parse_page(raw: Option<&str>) -> AppResult<usize> {
    let Some(value) = raw else {
        return Ok(1);
    };
    match value.trim().parse::<i64>() {
        Ok(page) if page >= 1 => Ok(page as usize),
        Ok(page) => Err(AppError::BadRequest(format!("页码必须从 1 开始: {}", page))),
        Err(_) => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_never_exceed_page_size_and_reassemble() {
        for len in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..len).collect();
            let mut rebuilt = Vec::new();
            let mut page = 1;
            loop {
                let chunk = paginate(page, QUESTIONS_PER_PAGE, &items);
                assert!(chunk.len() <= QUESTIONS_PER_PAGE);
                if chunk.is_empty() {
                    break;
                }
                rebuilt.extend(chunk);
                page += 1;
            }
            assert_eq!(rebuilt, items, "len = {}", len);
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<u8> = (0..19).collect();
        assert_eq!(paginate(2, 10, &items).len(), 9);
        assert!(paginate(3, 10, &items).is_empty());
        assert!(paginate(100, 10, &items).is_empty());
        assert!(paginate(0, 10, &items).is_empty());
        assert!(paginate(usize::MAX, 10, &items).is_empty());
    }

    #[test]
    fn page_parameter_defaults() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("abc")).unwrap(), 1);
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert!(matches!(parse_page(Some("0")), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_page(Some("-2")), Err(AppError::BadRequest(_))));
    }
}
