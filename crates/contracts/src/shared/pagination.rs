//! Постраничный вывод для небольших таблиц (1-based номера страниц)

/// Количество страниц; для пустого списка 0
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Номер страницы, зажатый в `1..=total` (минимум 1)
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Срез записей для страницы `page`; за пределами диапазона пусто
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Подпись "Showing 1 to 5 of 8"
pub fn range_label(page: usize, page_size: usize, len: usize) -> String {
    if len == 0 || page == 0 {
        return format!("Showing 0 of {}", len);
    }
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(len);
    format!("Showing {} to {} of {}", start, end, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(8, 5), 2);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<u32> = (1..=8).collect();
        assert_eq!(page_slice(&rows, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows, 2, 5), &[6, 7, 8]);
        assert!(page_slice(&rows, 3, 5).is_empty());
        assert!(page_slice(&rows, 0, 5).is_empty());
    }

    #[test]
    fn test_clamp_and_label() {
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(range_label(2, 5, 8), "Showing 6 to 8 of 8");
        assert_eq!(range_label(1, 5, 0), "Showing 0 of 0");
    }
}
