//! Chat view state.
//!
//! One seeded message list plus a reply-thread map keyed by parent
//! message id. Pins and threads tabs are pure filters over the same
//! list, recomputed on every render. The thread compose box has its
//! own draft field so channel and thread input never share state.

pub mod markup;

use std::collections::HashMap;

use uuid::Uuid;

use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub visibility: Visibility,
}

impl Channel {
    pub fn marker(&self) -> char {
        match self.visibility {
            Visibility::Public => '#',
            Visibility::Private => '◆',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub presence: Presence,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    pub body: String,
    pub time_label: String,
    pub own: bool,
    pub pinned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTab {
    Messages,
    Pins,
    Threads,
}

impl ChatTab {
    pub const ALL: [ChatTab; 3] = [ChatTab::Messages, ChatTab::Pins, ChatTab::Threads];

    pub fn label(&self) -> &'static str {
        match self {
            ChatTab::Messages => "Messages",
            ChatTab::Pins => "Pins",
            ChatTab::Threads => "Threads",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ChatTab::Messages => ChatTab::Pins,
            ChatTab::Pins => ChatTab::Threads,
            ChatTab::Threads => ChatTab::Messages,
        }
    }
}

pub struct ChatRoom {
    pub channels: Vec<Channel>,
    pub people: Vec<Person>,
    pub active_channel: usize,
    pub messages: Vec<ChatMessage>,
    pub thread_replies: HashMap<String, Vec<ChatMessage>>,
    pub active_tab: ChatTab,
    pub active_thread_id: Option<String>,
    pub draft: String,
    pub thread_draft: String,
    pub selected: usize,
    author_name: String,
}

impl ChatRoom {
    pub fn new(author_name: &str) -> Self {
        let mut thread_replies: HashMap<String, Vec<ChatMessage>> = HashMap::new();
        thread_replies.insert(
            "m2".to_string(),
            vec![message("m2-r1", "Alex Kim", "I can help with CTA options.", "10:23 AM")],
        );

        Self {
            channels: seed_channels(),
            people: seed_people(),
            active_channel: 0,
            messages: seed_messages(),
            thread_replies,
            active_tab: ChatTab::Messages,
            active_thread_id: Some("m2".to_string()),
            draft: String::new(),
            thread_draft: String::new(),
            selected: 0,
            author_name: author_name.to_string(),
        }
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.channels
            .get(self.active_channel)
            .or_else(|| self.channels.first())
    }

    pub fn select_channel_next(&mut self) {
        if !self.channels.is_empty() {
            self.active_channel = (self.active_channel + 1) % self.channels.len();
        }
    }

    pub fn select_channel_prev(&mut self) {
        if !self.channels.is_empty() {
            self.active_channel =
                (self.active_channel + self.channels.len() - 1) % self.channels.len();
        }
    }

    pub fn set_tab(&mut self, tab: ChatTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.selected = 0;
        }
    }

    pub fn cycle_tab(&mut self) {
        self.set_tab(self.active_tab.next());
    }

    /// Messages shown for the active tab. Pins and threads are pure
    /// filters over the message list, never cached.
    pub fn visible_messages(&self) -> Vec<&ChatMessage> {
        match self.active_tab {
            ChatTab::Messages => self.messages.iter().collect(),
            ChatTab::Pins => self.pinned_messages(),
            ChatTab::Threads => self.threaded_messages(),
        }
    }

    pub fn pinned_messages(&self) -> Vec<&ChatMessage> {
        self.messages.iter().filter(|m| m.pinned).collect()
    }

    pub fn threaded_messages(&self) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|m| self.reply_count(&m.id) > 0)
            .collect()
    }

    pub fn reply_count(&self, message_id: &str) -> usize {
        self.thread_replies
            .get(message_id)
            .map(|replies| replies.len())
            .unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_messages().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_message_id(&self) -> Option<String> {
        self.visible_messages()
            .get(self.selected)
            .map(|m| m.id.clone())
    }

    /// Append the trimmed channel draft as an own message. Empty or
    /// whitespace-only drafts are a no-op.
    pub fn submit_message(&mut self) {
        let body = self.draft.trim().to_string();
        if body.is_empty() {
            return;
        }
        let entry = ChatMessage {
            id: Uuid::new_v4().to_string(),
            author: self.author_name.clone(),
            body,
            time_label: util::clock_label(),
            own: true,
            pinned: false,
        };
        self.messages.push(entry);
        self.draft.clear();
    }

    /// Append the trimmed thread draft to the open thread's reply list,
    /// creating the list on first reply. No-op without an open thread
    /// or with an empty draft.
    pub fn submit_thread_reply(&mut self) {
        let Some(parent_id) = self.active_thread_id.clone() else {
            return;
        };
        let body = self.thread_draft.trim().to_string();
        if body.is_empty() {
            return;
        }
        let reply = ChatMessage {
            id: Uuid::new_v4().to_string(),
            author: self.author_name.clone(),
            body,
            time_label: util::clock_label(),
            own: true,
            pinned: false,
        };
        self.thread_replies.entry(parent_id).or_default().push(reply);
        self.thread_draft.clear();
    }

    /// Flip the pinned flag of the matching message; no effect if the
    /// id is not found.
    pub fn toggle_pin(&mut self, message_id: &str) {
        if let Some(entry) = self.messages.iter_mut().find(|m| m.id == message_id) {
            entry.pinned = !entry.pinned;
        }
        self.clamp_selection();
    }

    pub fn open_thread(&mut self, message_id: &str) {
        self.active_thread_id = Some(message_id.to_string());
        self.thread_draft.clear();
    }

    pub fn leave_thread(&mut self) {
        self.active_thread_id = None;
        self.thread_draft.clear();
    }

    pub fn in_thread_view(&self) -> bool {
        self.active_thread_id.is_some()
    }

    /// Parent message of the open thread, if its id still matches.
    pub fn thread_parent(&self) -> Option<&ChatMessage> {
        let id = self.active_thread_id.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn thread_replies_for(&self, message_id: &str) -> &[ChatMessage] {
        self.thread_replies
            .get(message_id)
            .map(|replies| replies.as_slice())
            .unwrap_or(&[])
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_messages().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

fn message(id: &str, author: &str, body: &str, time_label: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        author: author.to_string(),
        body: body.to_string(),
        time_label: time_label.to_string(),
        own: false,
        pinned: false,
    }
}

fn seed_channels() -> Vec<Channel> {
    let public = [
        ("general", "general"),
        ("product", "product"),
        ("design", "design"),
        ("engineering", "engineering"),
        ("support", "support"),
    ];
    let mut channels: Vec<Channel> = public
        .iter()
        .map(|(id, name)| Channel {
            id: id.to_string(),
            name: name.to_string(),
            visibility: Visibility::Public,
        })
        .collect();
    channels.push(Channel {
        id: "audit-leads".to_string(),
        name: "audit-leads".to_string(),
        visibility: Visibility::Private,
    });
    channels
}

fn seed_people() -> Vec<Person> {
    let roster = [
        ("Alex Kim", Presence::Online),
        ("Rina Lopez", Presence::Offline),
        ("Nate Brown", Presence::Busy),
        ("Maya Chen", Presence::Online),
        ("Ibrahim Noor", Presence::Offline),
    ];
    roster
        .iter()
        .map(|(name, presence)| Person {
            name: name.to_string(),
            presence: *presence,
        })
        .collect()
}

fn seed_messages() -> Vec<ChatMessage> {
    let mut first = message("m1", "Alex Kim", "Updated launch checklist is in Drive.", "10:14 AM");
    first.pinned = true;

    let second = message(
        "m2",
        "Rina Lopez",
        "Need one more pass on homepage copy.\n- tighten hero title\n- shorten CTA text",
        "10:19 AM",
    );

    let mut third = message("m3", "You", "I will review and share notes in 30 minutes.", "10:21 AM");
    third.own = true;

    vec![first, second, third]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> ChatRoom {
        ChatRoom::new("You")
    }

    #[test]
    fn test_submit_message_appends_exactly_one_own_message() {
        let mut chat = room();
        chat.draft = "  hi  ".to_string();
        chat.submit_message();

        assert_eq!(chat.messages.len(), 4);
        let last = chat.messages.last().unwrap();
        assert_eq!(last.author, "You");
        assert_eq!(last.body, "hi");
        assert!(last.own);
        assert!(!last.pinned);
        assert!(chat.draft.is_empty());
    }

    #[test]
    fn test_submit_empty_draft_is_a_no_op() {
        let mut chat = room();
        chat.draft = String::new();
        chat.submit_message();
        assert_eq!(chat.messages.len(), 3);

        chat.draft = "   \n  ".to_string();
        chat.submit_message();
        assert_eq!(chat.messages.len(), 3);
    }

    #[test]
    fn test_submitted_ids_are_unique() {
        let mut chat = room();
        for _ in 0..5 {
            chat.draft = "ping".to_string();
            chat.submit_message();
        }
        let mut ids: Vec<&str> = chat.messages.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), chat.messages.len());
    }

    #[test]
    fn test_toggle_pin_is_self_inverse() {
        let mut chat = room();
        let before: Vec<bool> = chat.messages.iter().map(|m| m.pinned).collect();
        chat.toggle_pin("m2");
        assert!(chat.messages[1].pinned);
        chat.toggle_pin("m2");
        let after: Vec<bool> = chat.messages.iter().map(|m| m.pinned).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_pin_on_missing_id_does_nothing() {
        let mut chat = room();
        let before: Vec<bool> = chat.messages.iter().map(|m| m.pinned).collect();
        chat.toggle_pin("missing");
        let after: Vec<bool> = chat.messages.iter().map(|m| m.pinned).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pins_tab_filters_pinned_messages() {
        let mut chat = room();
        let pinned = chat.pinned_messages();
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].id, "m1");

        chat.toggle_pin("m3");
        assert_eq!(chat.pinned_messages().len(), 2);
    }

    #[test]
    fn test_threads_tab_lists_messages_with_replies() {
        let chat = room();
        let threaded = chat.threaded_messages();
        assert_eq!(threaded.len(), 1);
        assert_eq!(threaded[0].id, "m2");
        assert_eq!(chat.reply_count("m2"), 1);
        assert_eq!(chat.reply_count("m1"), 0);
    }

    #[test]
    fn test_thread_reply_goes_to_thread_not_message_list() {
        let mut chat = room();
        chat.open_thread("m1");
        chat.thread_draft = "On it.".to_string();
        chat.submit_thread_reply();

        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.reply_count("m1"), 1);
        let reply = &chat.thread_replies_for("m1")[0];
        assert_eq!(reply.body, "On it.");
        assert!(reply.own);
        assert!(chat.thread_draft.is_empty());
    }

    #[test]
    fn test_thread_reply_without_open_thread_is_a_no_op() {
        let mut chat = room();
        chat.leave_thread();
        chat.thread_draft = "lost words".to_string();
        chat.submit_thread_reply();
        assert_eq!(chat.thread_replies.values().map(Vec::len).sum::<usize>(), 1);
    }

    #[test]
    fn test_open_and_leave_thread() {
        let mut chat = room();
        assert!(chat.in_thread_view());
        assert_eq!(chat.thread_parent().map(|m| m.id.as_str()), Some("m2"));

        chat.leave_thread();
        assert!(!chat.in_thread_view());
        assert!(chat.thread_parent().is_none());

        chat.open_thread("m3");
        assert_eq!(chat.thread_parent().map(|m| m.id.as_str()), Some("m3"));
    }

    #[test]
    fn test_thread_parent_missing_id_yields_none() {
        let mut chat = room();
        chat.open_thread("gone");
        assert!(chat.in_thread_view());
        assert!(chat.thread_parent().is_none());
    }

    #[test]
    fn test_channel_cycling_wraps() {
        let mut chat = room();
        assert_eq!(chat.active_channel().unwrap().id, "general");
        for _ in 0..chat.channels.len() {
            chat.select_channel_next();
        }
        assert_eq!(chat.active_channel().unwrap().id, "general");
        chat.select_channel_prev();
        assert_eq!(chat.active_channel().unwrap().id, "audit-leads");
        assert_eq!(chat.active_channel().unwrap().marker(), '◆');
    }

    #[test]
    fn test_tab_selection_resets_cursor() {
        let mut chat = room();
        chat.select_next();
        chat.select_next();
        assert_eq!(chat.selected, 2);
        chat.cycle_tab();
        assert_eq!(chat.active_tab, ChatTab::Pins);
        assert_eq!(chat.selected, 0);
        assert_eq!(chat.visible_messages().len(), 1);
    }

    #[test]
    fn test_unpinning_clamps_pin_tab_selection() {
        let mut chat = room();
        chat.set_tab(ChatTab::Pins);
        chat.toggle_pin("m1");
        assert!(chat.visible_messages().is_empty());
        assert_eq!(chat.selected, 0);
    }
}
