//! Outbound command bodies.
//!
//! Every structured outbound message is one of these kinds, discriminated on
//! the wire by the `type` field. The variant and field names below serialize
//! to the exact camelCase identifiers the remote component dispatches on.

use serde::{Deserialize, Serialize};

use crate::{handle::UpdateHandle, tags::TagRecord};

/// A command or data-update body, as carried inside a [`crate::CommandEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Full or partial tag-data update, stamped with a correlation handle.
    Tags {
        /// Tag records in first-reference order.
        tags: Vec<TagRecord>,
        /// Correlation handle echoed back by the `updated` acknowledgement.
        handle: UpdateHandle,
    },

    /// Discard all tag data held by the component.
    ResetData,

    /// Pan the graphic by a relative distance. Cumulative.
    MoveBy {
        /// Horizontal distance.
        dx: f64,
        /// Vertical distance.
        dy: f64,
        /// Animate the movement.
        animate: bool,
    },

    /// Apply a zoom step. Cumulative.
    ZoomTo {
        /// Zoom factor; greater than one zooms in.
        zoom_level: f64,
        /// Object id or point to zoom towards; component default when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<ZoomTarget>,
        /// Animate the zoom.
        animate: bool,
    },

    /// Restore the default zoom level and position.
    ZoomToOriginal {
        /// Animate the restore.
        animate: bool,
    },

    /// Enable or disable the pan/zoom toolbar.
    EnableTools {
        /// Pan tool enabled.
        pan_enabled: bool,
        /// Zoom tool enabled.
        zoom_enabled: bool,
    },

    /// Enable or disable pan/zoom via mouse.
    EnableMouse {
        /// Mouse pan enabled.
        pan_enabled: bool,
        /// Mouse zoom enabled.
        zoom_enabled: bool,
    },

    /// Configure mouse-wheel zoom direction and event propagation.
    SetMouseWheel {
        /// `true` = wheel back zooms out.
        direction_back_out: bool,
        /// Stop wheel events from propagating to the embedding page.
        block_event_propagation: bool,
    },

    /// Enable or disable keyboard pan/zoom.
    EnableKeyboard {
        /// Keyboard navigation enabled.
        key_enabled: bool,
    },

    /// Enable or disable blinking of alarmed objects.
    EnableAlarmFlash {
        /// Global alarm flash enabled.
        alarm_flash_enabled: bool,
    },

    /// Hide the component watermark.
    HideWatermark,

    /// Assign one color shortcut.
    SetColor {
        /// Shortcut number.
        color_number: u32,
        /// Color code to assign.
        color_code: String,
    },

    /// Replace the whole color shortcut table.
    SetColors {
        /// Opaque table of shortcut assignments, forwarded verbatim.
        colors_table: serde_json::Value,
    },
}

/// Target of a [`Command::ZoomTo`]: an object id or a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZoomTarget {
    /// Id of an object in the graphic.
    Id(String),
    /// Absolute coordinates.
    Point {
        /// Horizontal coordinate.
        x: f64,
        /// Vertical coordinate.
        y: f64,
    },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unit_kinds_serialize_bare() {
        assert_eq!(serde_json::to_value(Command::ResetData).unwrap(), json!({"type": "resetData"}));
        assert_eq!(
            serde_json::to_value(Command::HideWatermark).unwrap(),
            json!({"type": "hideWatermark"})
        );
    }

    #[test]
    fn move_by_wire_shape() {
        let cmd = Command::MoveBy { dx: -10.0, dy: 4.5, animate: true };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "moveBy", "dx": -10.0, "dy": 4.5, "animate": true})
        );
    }

    #[test]
    fn zoom_to_with_object_target() {
        let cmd = Command::ZoomTo {
            zoom_level: 1.1,
            target: Some(ZoomTarget::Id("pump3".to_owned())),
            animate: false,
        };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "zoomTo", "zoomLevel": 1.1, "target": "pump3", "animate": false})
        );
    }

    #[test]
    fn zoom_to_with_point_target() {
        let cmd = Command::ZoomTo {
            zoom_level: 0.8,
            target: Some(ZoomTarget::Point { x: 120.0, y: 40.0 }),
            animate: true,
        };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({
                "type": "zoomTo",
                "zoomLevel": 0.8,
                "target": {"x": 120.0, "y": 40.0},
                "animate": true
            })
        );
    }

    #[test]
    fn zoom_to_omits_absent_target() {
        let cmd = Command::ZoomTo { zoom_level: 1.1, target: None, animate: false };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "zoomTo", "zoomLevel": 1.1, "animate": false})
        );
    }

    #[test]
    fn toggle_kinds_use_camel_case_fields() {
        assert_eq!(
            serde_json::to_value(Command::EnableTools { pan_enabled: true, zoom_enabled: false })
                .unwrap(),
            json!({"type": "enableTools", "panEnabled": true, "zoomEnabled": false})
        );
        assert_eq!(
            serde_json::to_value(Command::SetMouseWheel {
                direction_back_out: true,
                block_event_propagation: false,
            })
            .unwrap(),
            json!({
                "type": "setMouseWheel",
                "directionBackOut": true,
                "blockEventPropagation": false
            })
        );
        assert_eq!(
            serde_json::to_value(Command::EnableAlarmFlash { alarm_flash_enabled: true }).unwrap(),
            json!({"type": "enableAlarmFlash", "alarmFlashEnabled": true})
        );
    }

    #[test]
    fn color_kinds_wire_shape() {
        assert_eq!(
            serde_json::to_value(Command::SetColor {
                color_number: 7,
                color_code: "#ff2200".to_owned(),
            })
            .unwrap(),
            json!({"type": "setColor", "colorNumber": 7, "colorCode": "#ff2200"})
        );
        assert_eq!(
            serde_json::to_value(Command::SetColors { colors_table: json!({"1": "#00ff00"}) })
                .unwrap(),
            json!({"type": "setColors", "colorsTable": {"1": "#00ff00"}})
        );
    }
}
