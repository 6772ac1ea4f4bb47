pub const PAGE: &str = "flex-1 overflow-y-auto bg-gray-50/50";
pub const PAGE_INNER: &str = "max-w-[640px] mx-auto px-4 md:px-6 py-6 md:py-8 flex flex-col items-center";
pub const TEXT_EYEBROW: &str = "text-xs text-[#E8513D] font-bold tracking-widest uppercase mb-1";
pub const TEXT_TITLE: &str = "text-xl md:text-2xl font-extrabold text-gray-900 tracking-tight mb-1";
pub const TEXT_SUBTITLE: &str = "text-xs sm:text-sm text-gray-400 mb-5 md:mb-7";
pub const CHIP_ROW: &str = "flex gap-1.5 sm:gap-2 mb-6 md:mb-10 flex-wrap justify-center max-w-[520px]";
pub const CHIP_BASE: &str = "flex items-center gap-1 sm:gap-1.5 px-3 py-1.5 sm:px-4 sm:py-2 rounded-full text-xs sm:text-sm font-semibold transition-all duration-200";
pub const CHIP_ACTIVE: &str = "bg-gray-900 text-white shadow-sm";
pub const CHIP_IDLE: &str = "bg-white text-gray-500 hover:text-gray-700 border border-black/10";
pub const BUTTON_SPIN: &str = "group flex items-center gap-2 px-8 sm:px-12 py-3 sm:py-3.5 rounded-full text-white font-bold text-base sm:text-lg transition-all duration-200";
pub const BUTTON_SPIN_ACTIVE: &str = "bg-gradient-to-r from-gray-900 to-gray-800 hover:from-gray-800 hover:to-gray-700 active:scale-95 shadow-lg shadow-gray-900/20";
pub const BUTTON_SPIN_DISABLED: &str = "bg-gray-300 cursor-not-allowed";
pub const CARD_RESULT: &str = "bg-white rounded-2xl p-6 text-center shadow-md border border-black/5";
pub const BUTTON_FIND: &str = "w-full flex items-center justify-center gap-2 px-6 py-3 bg-gradient-to-r from-[#E8513D] to-[#F2734E] text-white text-sm font-semibold rounded-xl active:scale-[0.98] transition-all shadow-sm";
pub const BANNER: &str = "mx-auto mb-6 max-w-[360px] rounded-xl bg-white px-4 py-3 text-center text-sm text-gray-600 shadow-sm";
