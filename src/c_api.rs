pub mod c_api {
    use crate::other_list::DoublyLinkedList;
    use std::ffi::{CStr, CString, c_char, c_int, c_long};
    use std::ptr;

    // 不透明指针类型，对C完全隐藏实现细节
    #[repr(C)]
    pub struct CTextDll {
        inner: DoublyLinkedList,
    }

    // 错误码定义
    pub const DLL_SUCCESS: c_int = 0;
    pub const DLL_ERROR_NULL_PTR: c_int = -1;
    pub const DLL_ERROR_EMPTY: c_int = -2;
    pub const DLL_ERROR_INVALID_UTF8: c_int = -3;
    pub const DLL_ERROR_ALLOC: c_int = -4;

    /// 将 C 风格字符串借为 Rust `&str`
    ///
    /// 指针为空或内容不是合法 UTF-8 时返回 `None`。调用方必须保证
    /// 非空指针指向以空字符结尾的有效缓冲区。
    fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
        if s.is_null() {
            return None;
        }
        unsafe { CStr::from_ptr(s) }.to_str().ok()
    }

    /// 将 Rust 字符串复制为调用方负责释放的 C 字符串
    ///
    /// 复制失败（内容含内部空字符）时返回空指针。返回的指针必须用
    /// [dll_free_string] 释放。
    fn string_to_cstr(s: &str) -> *mut c_char {
        match CString::new(s) {
            Ok(cstring) => cstring.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    }

    /// 创建一个新的C语言接口可用的文本双向链表实例
    ///
    /// 返回值:
    /// - 返回指向 `CTextDll` 实例的裸指针，内部包含一个空链表。
    ///   必须用 [dll_free] 释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_new() -> *mut CTextDll {
        Box::into_raw(Box::new(CTextDll {
            inner: DoublyLinkedList::new(),
        }))
    }

    /// 释放由[dll_new]创建的链表实例
    ///
    /// 参数:
    /// - `list`: 指向 `CTextDll` 实例的裸指针，该实例将被释放。
    ///
    /// 注意:
    /// - 空指针不执行任何操作。释放会先清空全部节点再回收链表本身。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_free(list: *mut CTextDll) {
        if !list.is_null() {
            unsafe {
                let _ = Box::from_raw(list);
            }
        }
    }

    /// 获取链表的当前元素数量
    ///
    /// 参数:
    /// - `list`: 指向 `CTextDll` 实例的常量裸指针。
    ///
    /// 返回值:
    /// - 返回链表中元素的数量。如果输入指针为空，则返回 0。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_len(list: *const CTextDll) -> usize {
        if list.is_null() {
            0
        } else {
            unsafe { (*list).inner.len() }
        }
    }

    /// 检查链表是否为空
    ///
    /// 返回值:
    /// - 输入指针为空时返回 `DLL_ERROR_NULL_PTR`；
    /// - 否则返回 1 表示空链表，0 表示非空。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_is_empty(list: *const CTextDll) -> c_int {
        if list.is_null() {
            DLL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    /// 在链表尾部追加一个文本值
    ///
    /// 参数:
    /// - `list`: 指向 `CTextDll` 实例的可变裸指针。
    /// - `value`: 指向要追加文本的 C 字符串指针，内容会被复制。
    ///
    /// 返回值:
    /// - `DLL_SUCCESS`: 追加成功；
    /// - `DLL_ERROR_NULL_PTR`: `list` 或 `value` 为空指针；
    /// - `DLL_ERROR_INVALID_UTF8`: `value` 不是合法 UTF-8；
    /// - `DLL_ERROR_ALLOC`: 节点或值存储分配失败。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_append(list: *mut CTextDll, value: *const c_char) -> c_int {
        if list.is_null() || value.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        let text = match cstr_to_str(value) {
            Some(text) => text,
            None => return DLL_ERROR_INVALID_UTF8,
        };

        match unsafe { &mut (*list).inner }.append_value(text) {
            Ok(_) => DLL_SUCCESS,
            Err(_) => DLL_ERROR_ALLOC,
        }
    }

    /// 移除并销毁链表的尾节点
    ///
    /// 返回值:
    /// - `DLL_SUCCESS`: 尾节点已移除；
    /// - `DLL_ERROR_EMPTY`: 链表为空，未移除任何节点；
    /// - `DLL_ERROR_NULL_PTR`: 输入指针为空。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_remove_last(list: *mut CTextDll) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        let inner = unsafe { &mut (*list).inner };
        if inner.is_empty() {
            return DLL_ERROR_EMPTY;
        }
        inner.remove_last();
        DLL_SUCCESS
    }

    /// 获取从头节点数起第 `n` 个节点的值副本
    ///
    /// 参数:
    /// - `list`: 指向 `CTextDll` 实例的常量裸指针。
    /// - `n`: 从 0 开始的下标。
    ///
    /// 返回值:
    /// - 返回值文本的独立副本，必须用 [dll_free_string] 释放；
    /// - 指针为空或 `n` 越过末尾时返回空指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_nth(list: *const CTextDll, n: usize) -> *mut c_char {
        if list.is_null() {
            return ptr::null_mut();
        }
        let inner = unsafe { &(*list).inner };
        match inner.nth_from_first(n).and_then(|node| inner.value(node)) {
            Some(value) => string_to_cstr(value),
            None => ptr::null_mut(),
        }
    }

    /// 从头开始线性查找第一个与给定文本相等的节点
    ///
    /// 返回值:
    /// - 返回第一个匹配节点的下标（从 0 开始）；
    /// - 没有匹配、链表为空、指针为空或文本非法时返回 -1。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_find(list: *const CTextDll, value: *const c_char) -> c_long {
        let text = match cstr_to_str(value) {
            Some(text) => text,
            None => return -1,
        };
        if list.is_null() {
            return -1;
        }
        let inner = unsafe { &(*list).inner };

        let mut walker = inner.first();
        let mut index: c_long = 0;
        while let Some(node_ref) = walker {
            if inner.value(node_ref) == Some(text) {
                return index;
            }
            walker = inner.next_of(node_ref);
            index += 1;
        }
        -1
    }

    /// 清空链表，逐个移除尾节点直到为空
    ///
    /// 返回值:
    /// - `DLL_SUCCESS`: 链表已清空（对空链表同样成功）；
    /// - `DLL_ERROR_NULL_PTR`: 输入指针为空。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_clear(list: *mut CTextDll) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        unsafe { &mut (*list).inner }.remove_all();
        DLL_SUCCESS
    }

    /// 释放由[dll_nth]返回的字符串
    ///
    /// 注意:
    /// - 空指针不执行任何操作；
    /// - 同一指针只能释放一次。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_free_string(ptr: *mut c_char) {
        if ptr.is_null() {
            return;
        }
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }

}
