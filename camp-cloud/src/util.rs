//! Shared utility functions for camp-cloud

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Suffix alphabet for booking ids; 0/O/1/I/L are omitted so ids survive
/// being read over the phone
const ID_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const ID_SUFFIX_LEN: usize = 8;

/// Human-readable booking identifier: `BK` + `yyyymmdd` + 8 random chars.
///
/// 31^8 suffix values per day bucket keep same-day collisions out of
/// practical reach; the unique constraint on `bookings.booking_id` catches
/// the rest and creation retries with a fresh id.
pub fn generate_booking_id() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("BK{}{suffix}", chrono::Utc::now().format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_format() {
        let id = generate_booking_id();
        assert_eq!(id.len(), 2 + 8 + ID_SUFFIX_LEN);
        assert!(id.starts_with("BK"));

        let date = &id[2..10];
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(date, chrono::Utc::now().format("%Y%m%d").to_string());

        let suffix = &id[10..];
        assert!(suffix.bytes().all(|b| ID_CHARSET.contains(&b)));
    }

    #[test]
    fn test_booking_ids_distinct_within_day_bucket() {
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| generate_booking_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
