use uuid::Uuid;

pub fn random_id() -> String {
    Uuid::now_v7().simple().to_string()
}

#[cfg(test)]
mod tests {
    #[test]
    fn random_id() {
        let first = super::random_id();
        let second = super::random_id();
        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }
}
