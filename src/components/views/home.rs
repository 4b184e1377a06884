use crate::components::{
    use_appearance, use_navigation, ColorKey, FlowAction, Icon, TextKind, ThemedText, ThemedView,
    UploadModal, UploadTable, UploadsController, APP_LOGO,
};
use crate::config::AppConfig;
use crate::uploads::{DetailsParams, SystemPicker, UploadList, UploadRecord};
use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let navigation = use_navigation();
    let appearance = use_appearance();
    let tint = appearance.color(ColorKey::Tint);
    let icon = appearance.color(ColorKey::Icon);
    let on_tint = appearance.on_tint();

    // The list lives and dies with this screen; nothing else can reach it.
    let uploads = use_signal(move || {
        if config.seed_sample_uploads {
            UploadList::seeded(Local::now())
        } else {
            UploadList::new()
        }
    });
    let controller = UploadsController::new(uploads);
    let mut modal_open = use_signal(|| false);

    let list = controller.current();
    let busy = list.is_busy();
    let records = list.records().to_vec();

    let on_select = {
        let navigation = navigation.clone();
        move |record: UploadRecord| {
            navigation.dispatch(FlowAction::OpenDetails(DetailsParams::from_record(&record)));
        }
    };

    let on_choose = move |_: ()| {
        spawn(async move {
            if controller.pick_and_add(SystemPicker).await.is_some() {
                modal_open.set(false);
            }
        });
    };

    rsx! {
        ThemedView { class: "screen screen-home".to_string(),
            div { class: "screen-header",
                div { class: "header-left",
                    img { class: "header-logo", src: APP_LOGO, alt: "" }
                    ThemedText { kind: TextKind::DefaultSemiBold, class: "header-title".to_string(),
                        "Audiobook"
                    }
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    style: "color: {icon};",
                    aria_label: "Profile",
                    onclick: move |_| navigation.dispatch(FlowAction::OpenProfile),
                    Icon {
                        name: "person-circle".to_string(),
                        class: "w-8 h-8".to_string(),
                    }
                }
            }

            ThemedText { kind: TextKind::Subtitle, class: "section-title".to_string(), "Uploads" }

            UploadTable { uploads: records, on_select }

            button {
                class: "fab",
                r#type: "button",
                style: "background-color: {tint}; color: {on_tint};",
                aria_label: "Add upload",
                onclick: move |_| modal_open.set(true),
                Icon { name: "plus".to_string(), class: "w-7 h-7".to_string() }
            }

            if modal_open() {
                UploadModal {
                    busy,
                    on_choose,
                    on_close: move |_| modal_open.set(false),
                }
            }
        }
    }
}
