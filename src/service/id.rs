use uuid::Uuid;

/// 去掉易混淆字符 (0/O, 1/I/l) 的 57 进制字母表，URL 安全
const ALPHABET: &[u8; 57] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// 2^128 < 57^22
pub const ID_LEN: usize = 22;

/// 生成小票ID: 随机 UUID v4 (122 位随机) 的 57 进制编码
pub fn new_id() -> String {
    encode(Uuid::new_v4().as_u128())
}

fn encode(mut value: u128) -> String {
    let base = ALPHABET.len() as u128;
    let mut digits = [ALPHABET[0]; ID_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % base) as usize];
        value /= base;
    }
    digits.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = new_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_bounds() {
        assert_eq!(encode(0), "2".repeat(ID_LEN));
        assert_eq!(encode(56), format!("{}z", "2".repeat(ID_LEN - 1)));
        assert_eq!(encode(u128::MAX).len(), ID_LEN);
        assert_ne!(encode(u128::MAX), encode(u128::MAX - 1));
    }

    #[test]
    fn test_no_duplicates() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
