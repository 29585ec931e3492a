//! Vietnamese message catalog.

pub(super) const MESSAGES: &[(&str, &str)] = &[
    // Common
    ("common.loading", "Đang tải..."),
    ("common.save", "Lưu"),
    ("common.cancel", "Hủy"),
    ("common.delete", "Xóa"),
    ("common.retry", "Thử lại"),
    ("common.today", "Hôm nay"),
    // Auth
    ("auth.login", "Đăng nhập"),
    ("auth.logout", "Đăng xuất"),
    ("auth.welcome", "Chào mừng trở lại, {name}!"),
    // Couple connection
    ("couple.invitation_sent", "Đã gửi lời mời đến {email}"),
    ("couple.invitation_code", "Mã mời của bạn là {code}"),
    ("couple.connected", "Bạn và {partner} đã kết nối với nhau"),
    ("couple.pending", "Đang chờ phản hồi"),
    ("couple.declined", "Lời mời đã bị từ chối"),
    ("couple.disconnected", "Kết nối đã kết thúc"),
    ("couple.days_together", "{count} ngày bên nhau"),
    ("couple.anniversary_countdown", "Còn {count} ngày đến ngày kỷ niệm"),
    ("couple.status", "Trạng thái kết nối: {status}"),
    // Timeline
    ("timeline.title", "Dòng thời gian của chúng mình"),
    ("timeline.empty", "Chưa có gì ở đây, hãy thêm kỷ niệm đầu tiên"),
    ("timeline.filter_all", "Tất cả"),
    ("timeline.memories", "Kỷ niệm"),
    ("timeline.reminders", "Nhắc nhở"),
    ("timeline.blogs", "Bài viết"),
    ("timeline.anniversaries", "Ngày kỷ niệm"),
    ("timeline.item_count", "{count} khoảnh khắc"),
    ("timeline.load_more", "Xem thêm"),
    // Notifications
    ("notifications.title", "Thông báo"),
    ("notifications.new_memory", "{name} vừa thêm một kỷ niệm mới"),
    ("notifications.new_blog", "{name} vừa đăng một bài viết"),
    ("notifications.reminder_due", "Đến hạn nhắc nhở: {title}"),
    ("notifications.anniversary_today", "Hôm nay là ngày kỷ niệm của hai bạn!"),
    // Dashboard
    ("dashboard.title", "Bảng điều khiển"),
    ("dashboard.recent_activity", "{count} khoảnh khắc trong tuần qua"),
    ("dashboard.completion", "Đã hoàn thành {percent}% nhắc nhở"),
    ("dashboard.stats_memories", "{count} kỷ niệm"),
    ("dashboard.stats_blogs", "{count} bài viết"),
    // Blog
    ("blog.draft_saved", "Đã lưu bản nháp"),
    ("blog.published", "Đã đăng {title}"),
    ("blog.likes", "{count} lượt thích"),
    ("blog.views", "{count} lượt xem"),
    // Themes
    ("theme.spring", "Mùa xuân"),
    ("theme.summer", "Mùa hạ"),
    ("theme.autumn", "Mùa thu"),
    ("theme.winter", "Mùa đông"),
    ("theme.love", "Tình yêu"),
    ("theme.dark_mode", "Chế độ tối"),
];
