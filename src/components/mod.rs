pub mod campsite_card;
pub mod campsite_info;
pub mod comment_form;
pub mod comments_list;
pub mod directory;
pub mod loading;
