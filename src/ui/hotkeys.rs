pub const FOLDER_KEYS: &[(&str, &str)] = &[
    ("<r>", "request access "),
    ("<u>", "refresh "),
    ("<Tab>", "next tab "),
    ("<q>", "quit "),
];
pub const REQUEST_KEYS: &[(&str, &str)] = &[
    ("<a>", "approve "),
    ("<x>", "reject "),
    ("<p>", "pending only "),
    ("<g>", "give access "),
    ("<u>", "refresh "),
    ("<q>", "quit "),
];
pub const AUTHORIZED_KEYS: &[(&str, &str)] = &[("<Enter>", "expand/collapse "), ("<u>", "refresh "), ("<q>", "quit ")];
pub const LOG_KEYS: &[(&str, &str)] = &[("<Del>", "delete "), ("<q>", "quit ")];
pub const INPUT_DIALOG_KEYS: &[(&str, &str)] = &[
    ("<Enter>", "send "),
    ("<Tab>", "next field "),
    ("<C-n/C-p>", "pick "),
    ("<Esc>", "cancel "),
];
pub const CONFIRM_DIALOG_KEYS: &[(&str, &str)] = &[("<Enter>", "choose "), ("<Esc>", "cancel ")];
