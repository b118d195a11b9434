//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! compartidas entre controladores.

/// Verificar que un email pertenece al dominio de la organización
pub fn email_has_domain(email: &str, domain: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, email_domain)) => !local.is_empty() && email_domain.eq_ignore_ascii_case(domain),
        None => false,
    }
}

/// Normalizar parámetros de paginación (página >= 1, límite entre 1 y 100)
pub fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(10).clamp(1, 100);
    (page, limit)
}

/// Calcular el número total de páginas para una paginación
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_has_domain() {
        assert!(email_has_domain("ana@reveeinfotech.com", "reveeinfotech.com"));
        assert!(email_has_domain("ana@REVEEINFOTECH.COM", "reveeinfotech.com"));
        assert!(!email_has_domain("ana@gmail.com", "reveeinfotech.com"));
        assert!(!email_has_domain("@reveeinfotech.com", "reveeinfotech.com"));
        assert!(!email_has_domain("sin-arroba", "reveeinfotech.com"));
    }

    #[test]
    fn test_normalize_pagination_defaults() {
        assert_eq!(normalize_pagination(None, None), (1, 10));
    }

    #[test]
    fn test_normalize_pagination_clamps() {
        assert_eq!(normalize_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_pagination(Some(-3), Some(1000)), (1, 100));
        assert_eq!(normalize_pagination(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }
}
