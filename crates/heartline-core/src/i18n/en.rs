//! English message catalog (reference locale).

pub(super) const MESSAGES: &[(&str, &str)] = &[
    // Common
    ("common.loading", "Loading..."),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.delete", "Delete"),
    ("common.retry", "Retry"),
    ("common.today", "Today"),
    // Auth
    ("auth.login", "Log in"),
    ("auth.logout", "Log out"),
    ("auth.welcome", "Welcome back, {name}!"),
    // Couple connection
    ("couple.invitation_sent", "Invitation sent to {email}"),
    ("couple.invitation_code", "Your invitation code is {code}"),
    ("couple.connected", "You and {partner} are now connected"),
    ("couple.pending", "Waiting for a response"),
    ("couple.declined", "The invitation was declined"),
    ("couple.disconnected", "The connection has ended"),
    ("couple.days_together", "{count} days together"),
    ("couple.anniversary_countdown", "{count} days until your anniversary"),
    ("couple.status", "Connection status: {status}"),
    // Timeline
    ("timeline.title", "Our timeline"),
    ("timeline.empty", "Nothing here yet, add your first memory"),
    ("timeline.filter_all", "All"),
    ("timeline.memories", "Memories"),
    ("timeline.reminders", "Reminders"),
    ("timeline.blogs", "Posts"),
    ("timeline.anniversaries", "Anniversaries"),
    ("timeline.item_count", "{count} moments"),
    ("timeline.load_more", "Load more"),
    // Notifications
    ("notifications.title", "Notifications"),
    ("notifications.new_memory", "{name} added a new memory"),
    ("notifications.new_blog", "{name} published a post"),
    ("notifications.reminder_due", "Reminder due: {title}"),
    ("notifications.anniversary_today", "Today is your anniversary!"),
    // Dashboard
    ("dashboard.title", "Dashboard"),
    ("dashboard.recent_activity", "{count} moments in the last week"),
    ("dashboard.completion", "{percent}% of reminders completed"),
    ("dashboard.stats_memories", "{count} memories"),
    ("dashboard.stats_blogs", "{count} posts"),
    // Blog
    ("blog.draft_saved", "Draft saved"),
    ("blog.published", "Published {title}"),
    ("blog.likes", "{count} likes"),
    ("blog.views", "{count} views"),
    // Themes
    ("theme.spring", "Spring"),
    ("theme.summer", "Summer"),
    ("theme.autumn", "Autumn"),
    ("theme.winter", "Winter"),
    ("theme.love", "Love"),
    ("theme.dark_mode", "Dark mode"),
];
