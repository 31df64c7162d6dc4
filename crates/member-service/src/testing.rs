//! In-memory fakes shared by the unit tests.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use member_core::{Member, MemberError, MemberId, MemberResult};
use member_repository::MemberRepository;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Cache fake with TTLs on the tokio clock and a configurable `SCAN` page size.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    page_size: usize,
    pub scan_calls: AtomicUsize,
    pub keys_calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::with_page_size(usize::MAX)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            page_size: page_size.max(1),
            scan_calls: AtomicUsize::new(0),
            keys_calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Returns the live raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(value, _)| value.clone())
    }

    fn live_keys(&self) -> Vec<String> {
        let now = Instant::now();
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, (_, expires_at))| *expires_at > now)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn check(&self) -> MemberResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MemberError::cache("connection refused"));
        }
        Ok(())
    }
}

fn matches(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => pattern == key,
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    async fn get_raw(&self, key: &str) -> MemberResult<Option<String>> {
        self.check()?;
        Ok(self.raw(key))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MemberResult<()> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> MemberResult<bool> {
        self.check()?;
        let existed = self.raw(key).is_some();
        self.entries.lock().unwrap().remove(key);
        Ok(existed)
    }

    async fn exists(&self, key: &str) -> MemberResult<bool> {
        self.check()?;
        Ok(self.raw(key).is_some())
    }

    async fn scan(&self, pattern: &str, count: usize) -> MemberResult<HashSet<String>> {
        self.check()?;
        let page_size = self.page_size.min(count.max(1));
        let keys = self.live_keys();
        let mut found = HashSet::new();

        // Walk the keyspace in pages, re-reporting the last key of each page
        // the way a real SCAN may return duplicates.
        let mut cursor: usize = 0;
        loop {
            self.scan_calls.fetch_add(1, Ordering::SeqCst);
            let end = cursor.saturating_add(page_size).min(keys.len());
            let start = cursor.saturating_sub(1);
            found.extend(
                keys[start..end]
                    .iter()
                    .filter(|key| matches(pattern, key))
                    .cloned(),
            );
            if end >= keys.len() {
                break;
            }
            cursor = end;
        }

        Ok(found)
    }

    async fn keys(&self, pattern: &str) -> MemberResult<HashSet<String>> {
        self.check()?;
        self.keys_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .live_keys()
            .into_iter()
            .filter(|key| matches(pattern, key))
            .collect())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Repository fake with per-method call counters.
pub struct InMemoryMemberRepository {
    members: Mutex<BTreeMap<MemberId, Member>>,
    next_id: AtomicI64,
    pub find_all_calls: AtomicUsize,
    pub mutations: AtomicUsize,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            find_all_calls: AtomicUsize::new(0),
            mutations: AtomicUsize::new(0),
        }
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let repo = Self::new();
        for member in members {
            let id = member.id.unwrap_or_else(|| repo.allocate_id());
            repo.next_id.fetch_max(id.into_inner() + 1, Ordering::SeqCst);
            repo.members.lock().unwrap().insert(id, Member { id: Some(id), ..member });
        }
        repo
    }

    fn allocate_id(&self) -> MemberId {
        MemberId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn find_all_count(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Member> {
        self.members.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_all(&self) -> MemberResult<Vec<Member>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: MemberId) -> MemberResult<Option<Member>> {
        Ok(self.members.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, member: &Member) -> MemberResult<Member> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let id = self.allocate_id();
        let saved = Member {
            id: Some(id),
            ..member.clone()
        };
        self.members.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, member: &Member) -> MemberResult<Member> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let id = member
            .id
            .ok_or_else(|| MemberError::internal("member has no id"))?;
        let mut members = self.members.lock().unwrap();
        if !members.contains_key(&id) {
            return Err(MemberError::not_found("Member", id));
        }
        members.insert(id, member.clone());
        Ok(member.clone())
    }

    async fn delete_by_id(&self, id: MemberId) -> MemberResult<bool> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.lock().unwrap().remove(&id).is_some())
    }
}
